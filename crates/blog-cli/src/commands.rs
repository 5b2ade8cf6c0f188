use anyhow::Context;
use blog_server::{BlogServer, ServerConfig};
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::CheckSeed(args) => cmd_check_seed(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let server = BlogServer::bootstrap(config)?;
    println!(
        "{} Blog server on {} (prefix: {})",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold(),
        server.config().api_prefix.cyan()
    );

    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

/// File config first, then command-line overrides.
fn resolve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("cannot load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(prefix) = args.prefix {
        config.api_prefix = prefix;
    }
    if let Some(seed) = args.seed {
        config.seed_path = Some(seed);
    }
    config.validate()?;
    tracing::debug!(?config, "resolved server configuration");
    Ok(config)
}

fn cmd_check_seed(args: CheckSeedArgs) -> anyhow::Result<()> {
    let file = blog_service::load_seed_file(&args.path)
        .with_context(|| format!("cannot use seed file {}", args.path.display()))?;
    println!(
        "{} {} posts in {}",
        "✓".green().bold(),
        file.posts.len().to_string().bold(),
        args.path.display()
    );
    for post in &file.posts {
        println!("  {} by {}", post.title.yellow(), post.author);
    }
    Ok(())
}
