//! User Proxy
//!
//! Looks up HackerNews user profiles with a nickname-keyed cache in front.
//! A nickname that upstream confirms unknown is cached as `None` so repeated
//! lookups inside the TTL window skip the refetch; failed fetches are never
//! cached.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::cache::TtlCache;
use crate::error::{ProxyError, Result};
use crate::hn::{HnApi, HnClient, HnUser};

// == Domain Type ==
/// A HackerNews user profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// The user's unique nickname
    pub nickname: String,
    /// Self-description, empty when the user never set one
    pub about: String,
    /// Accumulated karma
    pub karma: u64,
    /// Account creation time
    pub joined: DateTime<Utc>,
}

// == User Proxy ==
/// Caching lookup service for user profiles.
///
/// The cached value is `Option<User>`: `Some` for a real profile, `None`
/// for a nickname upstream confirmed does not exist.
#[derive(Debug, Clone)]
pub struct UserProxy<C = HnClient> {
    client: C,
    cache: TtlCache<String, Option<User>>,
}

impl<C: HnApi> UserProxy<C> {
    // == Constructor ==
    /// Creates a proxy over `client`, using `cache` for lookups.
    pub fn new(client: C, cache: TtlCache<String, Option<User>>) -> Self {
        Self { client, cache }
    }

    // == Get User Info ==
    /// Returns the user's profile, or `Ok(None)` when upstream confirms the
    /// nickname does not exist.
    ///
    /// # Errors
    /// - [`ProxyError::InvalidArgument`] when `nickname` is empty
    /// - [`ProxyError::Upstream`] when the fetch fails; the failure is not
    ///   cached, so the next lookup retries upstream
    pub async fn get_user_info(&self, nickname: &str) -> Result<Option<User>> {
        if nickname.is_empty() {
            return Err(ProxyError::InvalidArgument(
                "a nickname is required to look up a user".to_string(),
            ));
        }

        let key = nickname.to_string();
        if let Some(cached) = self.cache.get(&key).await {
            debug!(nickname, "user served from cache");
            return Ok(cached);
        }

        debug!(nickname, "user not cached, fetching from HackerNews");
        let user = self.fetch_user(nickname).await?;
        self.cache.insert(key, user.clone()).await;

        Ok(user)
    }

    async fn fetch_user(&self, nickname: &str) -> Result<Option<User>> {
        let profile = self.client.user(nickname).await?;
        Ok(profile.map(User::from))
    }
}

impl From<HnUser> for User {
    fn from(raw: HnUser) -> Self {
        Self {
            nickname: raw.id,
            about: raw.about.unwrap_or_default(),
            karma: raw.karma,
            joined: DateTime::from_timestamp(raw.created, 0).unwrap_or_default(),
        }
    }
}
