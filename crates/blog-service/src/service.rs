use async_trait::async_trait;
use blog_store::StoreResult;
use blog_types::{Post, PostId};

/// Operations the HTTP layer may invoke.
///
/// Results and errors are those of the underlying repository, unchanged.
#[async_trait]
pub trait BlogService: Send + Sync {
    async fn get_post(&self, id: PostId) -> StoreResult<Post>;
    async fn get_posts(&self) -> StoreResult<Vec<Post>>;
    async fn create_post(&self, post: Post) -> StoreResult<PostId>;
    async fn update_post(&self, post: Post, id: PostId) -> StoreResult<()>;
    async fn delete_post(&self, id: PostId) -> StoreResult<()>;
}
