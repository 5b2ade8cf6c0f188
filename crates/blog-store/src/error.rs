use blog_types::PostId;

/// Errors from post repository operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The requested post does not exist.
    #[error("post not found")]
    NotFound(PostId),

    /// A previous writer panicked while holding the store lock.
    ///
    /// A create that fails this way has already drawn its id from the
    /// sequence; that id is never stored and never issued again.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// Failure reported by a non-memory storage backend.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns `true` for the "post not found" category.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
