use async_trait::async_trait;
use blog_store::{PostRepository, StoreResult};
use blog_types::{Post, PostId};

use crate::service::BlogService;

/// [`BlogService`] backed by a [`PostRepository`].
pub struct BlogUseCase<R> {
    repository: R,
}

impl<R: PostRepository> BlogUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: PostRepository> BlogService for BlogUseCase<R> {
    async fn get_post(&self, id: PostId) -> StoreResult<Post> {
        self.repository.get_post(id)
    }

    async fn get_posts(&self) -> StoreResult<Vec<Post>> {
        self.repository.get_posts()
    }

    async fn create_post(&self, post: Post) -> StoreResult<PostId> {
        self.repository.create_post(post)
    }

    async fn update_post(&self, post: Post, id: PostId) -> StoreResult<()> {
        self.repository.update_post(post, id)
    }

    async fn delete_post(&self, id: PostId) -> StoreResult<()> {
        self.repository.delete_post(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use blog_store::{InMemoryPostRepository, StoreError};

    use super::*;

    /// Records every call and answers with canned results.
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingRepository {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PostRepository for RecordingRepository {
        fn get_post(&self, id: PostId) -> StoreResult<Post> {
            self.record(format!("get:{id}"));
            Err(StoreError::NotFound(id))
        }

        fn get_posts(&self) -> StoreResult<Vec<Post>> {
            self.record("list".into());
            Ok(vec![Post::new("a", "t", "c").with_id(1)])
        }

        fn create_post(&self, post: Post) -> StoreResult<PostId> {
            self.record(format!("create:{}", post.title));
            Ok(7)
        }

        fn update_post(&self, post: Post, id: PostId) -> StoreResult<()> {
            self.record(format!("update:{}:{id}", post.title));
            Err(StoreError::Backend("disk full".into()))
        }

        fn delete_post(&self, id: PostId) -> StoreResult<()> {
            self.record(format!("delete:{id}"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn delegates_each_operation_once() {
        let usecase = BlogUseCase::new(RecordingRepository::default());

        let _ = usecase.get_post(3).await;
        let _ = usecase.get_posts().await;
        let _ = usecase.create_post(Post::new("a", "first", "c")).await;
        let _ = usecase.update_post(Post::new("a", "second", "c"), 4).await;
        let _ = usecase.delete_post(5).await;

        assert_eq!(
            usecase.repository().calls(),
            vec!["get:3", "list", "create:first", "update:second:4", "delete:5"]
        );
    }

    #[tokio::test]
    async fn propagates_results_verbatim() {
        let usecase = BlogUseCase::new(RecordingRepository::default());

        assert_eq!(usecase.get_post(3).await, Err(StoreError::NotFound(3)));
        assert_eq!(usecase.get_posts().await.unwrap().len(), 1);
        assert_eq!(usecase.create_post(Post::default()).await, Ok(7));
        assert_eq!(
            usecase.update_post(Post::default(), 1).await,
            Err(StoreError::Backend("disk full".into()))
        );
        assert_eq!(usecase.delete_post(1).await, Ok(()));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let service: Box<dyn BlogService> =
            Box::new(BlogUseCase::new(InMemoryPostRepository::new()));

        let id = service.create_post(Post::new("Anton", "On mockery", "qwerty")).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(service.get_post(id).await.unwrap().title, "On mockery");
        service.delete_post(id).await.unwrap();
        assert!(service.get_post(id).await.unwrap_err().is_not_found());
    }
}
