use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blog", about = "In-memory blog post service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Parse a seed file and report what it contains
    CheckSeed(CheckSeedArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Path prefix for the post routes
    #[arg(long)]
    pub prefix: Option<String>,
    /// JSON file of posts to load at startup
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckSeedArgs {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_flags() {
        let cli = Cli::parse_from([
            "blog", "serve", "--bind", "0.0.0.0:9000", "--seed", "posts.json",
        ]);
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.bind, Some("0.0.0.0:9000".parse().unwrap()));
                assert_eq!(args.seed, Some(PathBuf::from("posts.json")));
                assert!(args.config.is_none());
                assert!(args.prefix.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_check_seed_with_global_verbose() {
        let cli = Cli::parse_from(["blog", "check-seed", "posts.json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::CheckSeed(_)));
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["blog", "serve", "--bind", "nowhere"]).is_err());
    }
}
