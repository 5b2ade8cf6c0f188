//! Post storage for the blog service.
//!
//! The repository is the sole owner of stored posts and of identifier
//! assignment. Controllers and the use-case layer only pass [`Post`] values
//! through; they never mutate stored state directly.
//!
//! # Storage Backends
//!
//! All backends implement the [`PostRepository`] trait:
//!
//! - [`InMemoryPostRepository`] -- `HashMap`-based store guarded by a
//!   reader/writer lock, with an atomic sequence counter for ids
//!
//! # Design Rules
//!
//! 1. Ids are issued from a single sequence starting at 1 and are never reused.
//! 2. A post's id never changes after creation, including across updates.
//! 3. Reads run concurrently with each other; writes are exclusive.
//! 4. Updating a missing post fails with [`StoreError::NotFound`]; deleting a
//!    missing post is a no-op.

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use blog_types::{Post, PostId};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPostRepository;
pub use traits::PostRepository;
