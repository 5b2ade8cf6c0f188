use std::path::Path;
use std::sync::Arc;

use blog_service::{seed_from_file, BlogService, BlogUseCase};
use blog_store::{InMemoryPostRepository, PostRepository};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Blog HTTP server.
pub struct BlogServer {
    config: ServerConfig,
    service: Arc<dyn BlogService>,
}

impl BlogServer {
    pub fn new(config: ServerConfig, service: Arc<dyn BlogService>) -> Self {
        Self { config, service }
    }

    /// Build the in-memory repository and use case, seeding from
    /// `config.seed_path` when set.
    ///
    /// A missing or broken seed file is logged and the server still starts.
    pub fn bootstrap(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;

        let repository = Arc::new(InMemoryPostRepository::new());
        if let Some(path) = &config.seed_path {
            match seed_repository(path, repository.as_ref()) {
                Some(seeded) => info!(seeded, "repository seeded"),
                None => warn!(file = %path.display(), "seed file not fully loaded"),
            }
        }

        let service: Arc<dyn BlogService> = Arc::new(BlogUseCase::new(repository));
        Ok(Self::new(config, service))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn service(&self) -> Arc<dyn BlogService> {
        Arc::clone(&self.service)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.service(), &self.config.api_prefix)
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        info!(
            addr = %self.config.bind_addr,
            prefix = %self.config.api_prefix,
            "blog server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        info!("blog server stopped");
        Ok(())
    }
}

/// Returns the number of seeded posts, or `None` if seeding did not finish.
fn seed_repository<R: PostRepository + ?Sized>(path: &Path, repository: &R) -> Option<usize> {
    if !path.exists() {
        error!(file = %path.display(), "seed file not found");
        return None;
    }
    match seed_from_file(path, repository) {
        Ok(created) => Some(created),
        Err(e) => {
            error!(error = %e, "seeding failed");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
