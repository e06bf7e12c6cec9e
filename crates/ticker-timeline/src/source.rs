#![forbid(unsafe_code)]

//! Where the posts come from.
//!
//! The widget only sees the [`FetchItems`] seam. No network client lives in
//! this crate; hosts plug in their own transport, and [`JsonFileSource`]
//! covers fixtures and offline use.

use std::path::{Path, PathBuf};

use crate::post::{ErrorPayload, FetchResponse, Post};

/// Supplies the raw post records for one widget start.
pub trait FetchItems {
    fn fetch(&mut self) -> Result<Vec<Post>, ErrorPayload>;
}

impl<F> FetchItems for F
where
    F: FnMut() -> Result<Vec<Post>, ErrorPayload>,
{
    fn fetch(&mut self) -> Result<Vec<Post>, ErrorPayload> {
        self()
    }
}

/// A fixed response, replayed on every fetch.
#[derive(Debug, Clone)]
pub struct StaticSource {
    response: Result<Vec<Post>, ErrorPayload>,
}

impl StaticSource {
    pub fn posts(posts: Vec<Post>) -> Self {
        Self {
            response: Ok(posts),
        }
    }

    pub fn failure(payload: ErrorPayload) -> Self {
        Self {
            response: Err(payload),
        }
    }
}

impl FetchItems for StaticSource {
    fn fetch(&mut self) -> Result<Vec<Post>, ErrorPayload> {
        self.response.clone()
    }
}

/// Reads a [`FetchResponse`] from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FetchItems for JsonFileSource {
    fn fetch(&mut self) -> Result<Vec<Post>, ErrorPayload> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            ErrorPayload::new("io").with_message(format!("{}: {e}", self.path.display()))
        })?;
        let response: FetchResponse = serde_json::from_str(&raw)
            .map_err(|e| ErrorPayload::new("decode").with_message(e.to_string()))?;
        response.into_result()
    }
}
