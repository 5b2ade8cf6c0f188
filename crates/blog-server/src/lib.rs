//! HTTP server for the blog service.
//!
//! Exposes create, read, update, delete and list operations on posts as a
//! JSON API backed by an in-process repository. Handlers record failures
//! as [`ApiError`] values; a single middleware turns them into
//! `{"error": ...}` responses with the mapped status code.

pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, RecordedError, ServerError, ServerResult};
pub use model::{ErrorBody, HealthResponse, IdResponse, PostRequest, PostsResponse};
pub use router::build_router;
pub use server::BlogServer;
