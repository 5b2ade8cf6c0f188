//! Request handlers.
//!
//! Handlers turn requests into [`BlogService`] calls and results into
//! responses. On failure they return an [`ApiError`] and stop; rendering is
//! left to [`handle_errors`](crate::middleware::handle_errors).

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use blog_service::BlogService;
use blog_types::{Post, PostId};

use crate::error::ApiError;
use crate::model::{HealthResponse, IdResponse, PostRequest, PostsResponse};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn BlogService>,
}

impl AppState {
    pub fn new(service: Arc<dyn BlogService>) -> Self {
        Self { service }
    }
}

type IdPath = Result<Path<PostId>, PathRejection>;
type PostBody = Result<Bytes, BytesRejection>;

/// Decode a create/update body as JSON whatever its `Content-Type`.
fn parse_post(body: PostBody) -> Result<Post, ApiError> {
    let bytes = body?;
    let request: PostRequest = serde_json::from_slice(&bytes)?;
    Ok(request.into_post()?)
}

pub async fn get_post(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = path?;
    let post = state.service.get_post(id).await?;
    Ok(Json(post))
}

pub async fn get_posts(State(state): State<AppState>) -> Result<Json<PostsResponse>, ApiError> {
    let posts = state.service.get_posts().await?;
    Ok(Json(PostsResponse { posts }))
}

pub async fn create_post(
    State(state): State<AppState>,
    body: PostBody,
) -> Result<(StatusCode, Json<IdResponse>), ApiError> {
    let post = parse_post(body)?;
    let id = state.service.create_post(post).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

pub async fn update_post(
    State(state): State<AppState>,
    path: IdPath,
    body: PostBody,
) -> Result<Json<IdResponse>, ApiError> {
    let Path(id) = path?;
    let post = parse_post(body)?;
    state.service.update_post(post, id).await?;
    Ok(Json(IdResponse { id }))
}

/// Deleting a post that does not exist still answers 204.
pub async fn delete_post(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.service.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
