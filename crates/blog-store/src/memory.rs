//! In-memory post repository.
//!
//! [`InMemoryPostRepository`] keeps every post in a `HashMap` behind a
//! `RwLock`. Ids come from an `AtomicI64` that is advanced independently of
//! the map lock, so issuing an id is indivisible even though issuing and
//! inserting are two separate steps.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use blog_types::{Post, PostId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::PostRepository;

/// An in-memory implementation of [`PostRepository`].
///
/// Data is lost when the repository is dropped.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<PostId, Post>>,
    sequence: AtomicI64,
}

impl InMemoryPostRepository {
    /// Create an empty repository. The first created post gets id `1`.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if no posts are stored.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Highest id issued so far, or `0` if nothing was ever created.
    pub fn last_issued_id(&self) -> PostId {
        self.sequence.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> PostId {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<PostId, Post>>> {
        self.posts
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<PostId, Post>>> {
        self.posts
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn get_post(&self, id: PostId) -> StoreResult<Post> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn get_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn create_post(&self, post: Post) -> StoreResult<PostId> {
        // Drawn before locking: a poisoned lock leaves a gap at `id`.
        let id = self.next_id();
        let post = post.with_id(id);

        self.write()?.insert(id, post);
        debug!(id, "post created");
        Ok(id)
    }

    fn update_post(&self, post: Post, id: PostId) -> StoreResult<()> {
        let post = post.with_id(id);

        let mut posts = self.write()?;
        match posts.get_mut(&id) {
            Some(stored) => {
                *stored = post;
                debug!(id, "post updated");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn delete_post(&self, id: PostId) -> StoreResult<()> {
        let removed = self.write()?.remove(&id).is_some();
        debug!(id, removed, "post deleted");
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryPostRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.posts.read().map(|p| p.len()).ok();
        f.debug_struct("InMemoryPostRepository")
            .field("post_count", &count)
            .field("last_issued_id", &self.last_issued_id())
            .finish()
    }
}
