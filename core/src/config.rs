//! Client configuration.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the API lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent as the `API-KEY` header when present.
    pub api_key: Option<String>,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: None,
            token: None,
        }
    }

    /// Read `TODOLIST_API_URL`, `TODOLIST_API_KEY` and `TODOLIST_API_TOKEN`.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            base_url: get("TODOLIST_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: get("TODOLIST_API_KEY"),
            token: get("TODOLIST_API_TOKEN"),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
