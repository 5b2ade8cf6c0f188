//! Loading posts from a JSON seed file.
//!
//! The file is shaped `{"Posts": [{"author", "title", "content"}, ...]}`.
//! Ids present in the file are ignored; the repository assigns fresh ones.

use std::path::Path;

use blog_store::{PostRepository, StoreError};
use blog_types::Post;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Errors from seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not seed record {index}: {source}")]
    Create {
        index: usize,
        #[source]
        source: StoreError,
    },
}

pub type SeedResult<T> = Result<T, SeedError>;

/// Top-level seed document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(rename = "Posts", default)]
    pub posts: Vec<SeedPost>,
}

/// One record of a seed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPost {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl From<SeedPost> for Post {
    fn from(p: SeedPost) -> Self {
        Post::new(p.author, p.title, p.content)
    }
}

/// Parse a seed document from a string.
pub fn parse_seed(data: &str) -> SeedResult<SeedFile> {
    Ok(serde_json::from_str(data)?)
}

/// Read and parse a seed document from disk.
pub fn load_seed_file(path: &Path) -> SeedResult<SeedFile> {
    let data = std::fs::read_to_string(path)?;
    parse_seed(&data)
}

/// Create every record in order, stopping at the first failure.
///
/// Records created before a failure are left in place. Returns the number of
/// posts created.
pub fn seed_posts<R>(records: Vec<SeedPost>, repository: &R) -> SeedResult<usize>
where
    R: PostRepository + ?Sized,
{
    let total = records.len();
    for (index, record) in records.into_iter().enumerate() {
        repository
            .create_post(record.into())
            .map_err(|source| SeedError::Create { index, source })?;
    }
    Ok(total)
}

/// Load `path` and create its posts in `repository`.
pub fn seed_from_file<R>(path: &Path, repository: &R) -> SeedResult<usize>
where
    R: PostRepository + ?Sized,
{
    info!(source = %path.display(), "seeding started");
    let file = load_seed_file(path)?;
    let created = seed_posts(file.posts, repository)?;
    info!(created, "seeding completed");
    Ok(created)
}
