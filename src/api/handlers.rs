//! API Handlers
//!
//! HTTP request handlers for each proxy server endpoint.

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::hn::{HnApi, HnClient};
use crate::models::{HealthResponse, TopStoriesParams, TopStoriesResponse, UserResponse};
use crate::proxy::{StoriesProxy, UserProxy};

/// Application state shared across all handlers.
///
/// Each proxy owns its own cache instance; both share one upstream client.
/// Generic over the upstream so tests can run the full router against a
/// scripted HackerNews.
#[derive(Clone)]
pub struct AppState<C = HnClient> {
    /// User lookup proxy with its nickname-keyed cache
    pub users: UserProxy<C>,
    /// Top stories proxy with its id-keyed cache
    pub stories: StoriesProxy<C>,
}

impl<C: HnApi + Clone> AppState<C> {
    /// Creates state with fresh caches whose entries live for `ttl`.
    pub fn new(client: C, ttl: Duration) -> Self {
        Self {
            users: UserProxy::new(client.clone(), TtlCache::new(ttl)),
            stories: StoriesProxy::new(client, TtlCache::new(ttl)),
        }
    }
}

impl AppState {
    /// Creates state from configuration, building the upstream client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HnClient::new(
            &config.hn_base_url,
            Duration::from_secs(config.upstream_timeout_secs),
        )?;
        Ok(Self::new(client, Duration::from_secs(config.cache_ttl_secs)))
    }
}

/// Handler for GET /stories
///
/// Returns the requested number of current top stories.
pub async fn top_stories_handler<C>(
    State(state): State<AppState<C>>,
    Query(params): Query<TopStoriesParams>,
) -> Result<Json<TopStoriesResponse>>
where
    C: HnApi + Clone + Send + Sync + 'static,
{
    // Validate request
    if let Some(error_msg) = params.validate() {
        return Err(ProxyError::InvalidArgument(error_msg));
    }

    let stories = state
        .stories
        .top_stories(params.effective_count() as usize)
        .await?;

    Ok(Json(TopStoriesResponse::new(stories)))
}

/// Handler for GET /users/:nickname
///
/// Returns the user's profile; a nickname upstream does not know maps to
/// 404 even though the proxy caches that answer.
pub async fn user_handler<C>(
    State(state): State<AppState<C>>,
    Path(nickname): Path<String>,
) -> Result<Json<UserResponse>>
where
    C: HnApi + Clone + Send + Sync + 'static,
{
    let user = state.users.get_user_info(&nickname).await?;

    match user {
        Some(user) => Ok(Json(UserResponse::from(user))),
        None => Err(ProxyError::NotFound(format!(
            "user '{}' not found",
            nickname
        ))),
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
