//! HackerNews API Client
//!
//! Thin reqwest wrapper over the HackerNews Firebase API. The API returns
//! the JSON literal `null` for unknown items and users, which deserializes
//! into `None` here; callers decide whether that is an error.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

/// Base URL of the public HackerNews Firebase API
pub const HN_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

// == Raw Upstream Types ==
/// An item as returned by `item/{id}.json`.
///
/// Only the fields the proxy layer needs are kept; stories frequently omit
/// `url` (Ask HN posts) so it stays optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HnItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A user profile as returned by `user/{name}.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HnUser {
    pub id: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub karma: u64,
    /// Account creation time as a Unix timestamp
    #[serde(default)]
    pub created: i64,
}

// == Upstream Capability ==
/// Read access to the HackerNews API.
///
/// The proxies depend on this trait rather than on `HnClient` directly so
/// tests can substitute a scripted upstream.
#[async_trait]
pub trait HnApi: Send + Sync {
    /// Returns the ids of the current top stories, best first.
    async fn top_stories(&self) -> Result<Vec<u64>>;

    /// Fetches a single item, `None` when the id is unknown upstream.
    async fn item(&self, id: u64) -> Result<Option<HnItem>>;

    /// Fetches a user profile, `None` when the nickname is unknown upstream.
    async fn user(&self, nickname: &str) -> Result<Option<HnUser>>;
}

// == HTTP Client ==
/// reqwest-backed implementation of [`HnApi`].
#[derive(Debug, Clone)]
pub struct HnClient {
    client: reqwest::Client,
    base_url: String,
}

impl HnClient {
    /// Creates a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    }
}

#[async_trait]
impl HnApi for HnClient {
    async fn top_stories(&self) -> Result<Vec<u64>> {
        self.get_json("topstories.json").await
    }

    async fn item(&self, id: u64) -> Result<Option<HnItem>> {
        self.get_json(&format!("item/{}.json", id)).await
    }

    async fn user(&self, nickname: &str) -> Result<Option<HnUser>> {
        self.get_json(&format!("user/{}.json", nickname)).await
    }
}
