use std::sync::Arc;

use blog_types::{Post, PostId};

use crate::error::StoreResult;

/// Storage contract for blog posts.
///
/// All implementations must satisfy these invariants:
/// - Ids come from one shared sequence; the first is `1`, no two successful
///   creates ever receive the same id, and deleted ids are never reissued.
/// - The id of a stored post never changes.
/// - Implementations are safe to call from many request workers at once.
pub trait PostRepository: Send + Sync {
    /// Fetch a post by id.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if absent.
    fn get_post(&self, id: PostId) -> StoreResult<Post>;

    /// Snapshot of every stored post, in no particular order.
    fn get_posts(&self) -> StoreResult<Vec<Post>>;

    /// Assign the next id to `post`, store it and return the id.
    ///
    /// Any id already carried by `post` is overwritten.
    fn create_post(&self, post: Post) -> StoreResult<PostId>;

    /// Replace the post stored under `id` with `post`.
    ///
    /// The stored post always carries `id`, whatever `post.id` was on input.
    /// Fails with `NotFound` and changes nothing if `id` is not stored.
    fn update_post(&self, post: Post, id: PostId) -> StoreResult<()>;

    /// Remove the post stored under `id`. A missing id is not an error.
    fn delete_post(&self, id: PostId) -> StoreResult<()>;
}

impl<R: PostRepository + ?Sized> PostRepository for Arc<R> {
    fn get_post(&self, id: PostId) -> StoreResult<Post> {
        (**self).get_post(id)
    }

    fn get_posts(&self) -> StoreResult<Vec<Post>> {
        (**self).get_posts()
    }

    fn create_post(&self, post: Post) -> StoreResult<PostId> {
        (**self).create_post(post)
    }

    fn update_post(&self, post: Post, id: PostId) -> StoreResult<()> {
        (**self).update_post(post, id)
    }

    fn delete_post(&self, id: PostId) -> StoreResult<()> {
        (**self).delete_post(id)
    }
}
