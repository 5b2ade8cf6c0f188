//! Foundation types for the blog service.
//!
//! Every other crate in the workspace depends on `blog-types`.
//!
//! # Key Types
//!
//! - [`Post`] -- the stored blog post record
//! - [`PostId`] -- repository-assigned post identifier
//! - [`TypeError`] -- field-level validation failures

pub mod error;
pub mod post;

pub use error::TypeError;
pub use post::{Post, PostId};
