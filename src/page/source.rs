use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// A raw HTTP reply: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, LoadError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Where page loaders fetch their data from.
pub trait ApiSource {
    /// Issue a GET for `path` (e.g. `/api/resources`).
    fn get(&self, path: &str) -> Result<ApiReply, LoadError>;
}

/// Blocking HTTP source rooted at a base url.
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ApiSource for HttpSource {
    fn get(&self, path: &str) -> Result<ApiReply, LoadError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        Ok(ApiReply { status, body })
    }
}

/// Canned replies keyed by path.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    replies: HashMap<String, Result<ApiReply, String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .insert(path.to_string(), Ok(ApiReply::new(status, body)));
        self
    }

    /// Make requests for `path` fail before any response arrives.
    pub fn with_failure(mut self, path: &str, message: impl Into<String>) -> Self {
        self.replies.insert(path.to_string(), Err(message.into()));
        self
    }
}

impl ApiSource for StaticSource {
    fn get(&self, path: &str) -> Result<ApiReply, LoadError> {
        match self.replies.get(path) {
            Some(Ok(reply)) => Ok(reply.clone()),
            Some(Err(message)) => Err(LoadError::Transport(message.clone())),
            None => Err(LoadError::Transport(format!("no reply for {}", path))),
        }
    }
}
