//! JSON request and response bodies.

use blog_types::{Post, PostId, TypeError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of create and update requests. All three fields are required.
///
/// Keys are matched without regard to ASCII case; an exact lower-case key
/// wins over any other spelling. Unknown keys, such as a client-sent `ID`,
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PostRequest {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl PostRequest {
    /// Convert to an unassigned [`Post`], rejecting empty fields.
    pub fn into_post(self) -> Result<Post, TypeError> {
        let post = Post::new(self.author, self.title, self.content);
        post.validate()?;
        Ok(post)
    }
}

impl TryFrom<Map<String, Value>> for PostRequest {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            author: string_field(&fields, "author")?,
            title: string_field(&fields, "title")?,
            content: string_field(&fields, "content")?,
        })
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String, String> {
    let value = fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("field `{name}` must be a string, got {other}")),
        None => Err(format!("missing field `{name}`")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    #[serde(rename = "Id")]
    pub id: PostId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
