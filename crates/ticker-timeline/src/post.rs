#![forbid(unsafe_code)]

//! Post records as returned by the favorites endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Author of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub screen_name: String,
}

/// One post of the timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: u64,
    pub text: String,
    /// Raw timestamp, e.g. `Wed Aug 27 13:08:45 +0000 2008`. May be empty.
    #[serde(default)]
    pub created_at: String,
    /// Permalink opened when the rendered post is clicked.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<PostAuthor>,
}

impl Post {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Failure payload of the favorites endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.error),
            None => f.write_str(&self.error),
        }
    }
}

impl std::error::Error for ErrorPayload {}

/// Body of a favorites response: either a list of posts or an error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FetchResponse {
    Posts(Vec<Post>),
    Failure(ErrorPayload),
}

impl FetchResponse {
    pub fn into_result(self) -> Result<Vec<Post>, ErrorPayload> {
        match self {
            Self::Posts(posts) => Ok(posts),
            Self::Failure(payload) => Err(payload),
        }
    }
}
