//! The post record.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Identifier of a stored post.
///
/// Assigned by the repository; the first issued value is `1` and values are
/// never reused. `0` marks a post that has not been stored yet.
pub type PostId = i64;

/// A blog post.
///
/// Serialized with the field names `ID`, `Author`, `Title` and `Content`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Post {
    #[serde(rename = "ID", default)]
    pub id: PostId,
    pub author: String,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Create a post that has not been assigned an id yet.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Return the same post carrying `id`.
    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = id;
        self
    }

    /// Check that author, title and content are all non-empty.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.author.is_empty() {
            return Err(TypeError::EmptyField("author"));
        }
        if self.title.is_empty() {
            return Err(TypeError::EmptyField("title"));
        }
        if self.content.is_empty() {
            return Err(TypeError::EmptyField("content"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_is_unassigned() {
        let p = Post::new("Anton", "Big post", "something");
        assert_eq!(p.id, 0);
        assert_eq!(p.author, "Anton");
        assert_eq!(p.with_id(7).id, 7);
    }

    #[test]
    fn json_field_names() {
        let p = Post::new("Anton", "Big post", "something").with_id(1);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"ID":1,"Author":"Anton","Title":"Big post","Content":"something"}"#
        );
    }

    #[test]
    fn deserialize_without_id() {
        let p: Post =
            serde_json::from_str(r#"{"Author":"a","Title":"t","Content":"c"}"#).unwrap();
        assert_eq!(p, Post::new("a", "t", "c"));
    }

    #[test]
    fn validate_accepts_complete_post() {
        assert!(Post::new("a", "t", "c").validate().is_ok());
    }

    #[test]
    fn validate_reports_first_empty_field() {
        assert_eq!(
            Post::new("", "t", "c").validate(),
            Err(TypeError::EmptyField("author"))
        );
        assert_eq!(
            Post::new("a", "", "").validate(),
            Err(TypeError::EmptyField("title"))
        );
        assert_eq!(
            Post::new("a", "t", "").validate(),
            Err(TypeError::EmptyField("content"))
        );
    }

    #[test]
    fn empty_field_message() {
        assert_eq!(
            TypeError::EmptyField("title").to_string(),
            "field 'title' must not be empty"
        );
    }
}
