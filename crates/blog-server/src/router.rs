use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use blog_service::BlogService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};
use crate::middleware::{handle_errors, render_panic};

/// Route paths. Post routes are relative to the configured API prefix.
pub mod endpoints {
    pub const HEALTH: &str = "/v1/health";
    pub const POSTS: &str = "/posts";
    pub const POST: &str = "/posts/:id";
}

/// Build the axum router with all blog endpoints.
pub fn build_router(service: Arc<dyn BlogService>, api_prefix: &str) -> Router {
    let api = Router::new()
        .route(
            endpoints::POSTS,
            get(handler::get_posts).post(handler::create_post),
        )
        .route(
            endpoints::POST,
            get(handler::get_post)
                .put(handler::update_post)
                .delete(handler::delete_post),
        )
        .with_state(AppState::new(service));

    let router = Router::new().route(endpoints::HEALTH, get(handler::health_handler));
    // axum refuses to nest at the root.
    let router = if api_prefix.is_empty() || api_prefix == "/" {
        router.merge(api)
    } else {
        router.nest(api_prefix, api)
    };

    router
        .layer(CatchPanicLayer::custom(render_panic))
        .layer(axum::middleware::from_fn(handle_errors))
        .layer(TraceLayer::new_for_http())
}
