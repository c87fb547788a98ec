//! Response DTOs for the proxy server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::proxy::{Story, User};

/// A single story in the top stories response
#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    /// The story's item id
    pub id: u64,
    /// Headline
    pub title: String,
    /// Link target, empty for self posts
    pub url: String,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self {
            id: story.id,
            title: story.title,
            url: story.url,
        }
    }
}

/// Response body for the top stories endpoint (GET /stories)
#[derive(Debug, Clone, Serialize)]
pub struct TopStoriesResponse {
    /// Requested stories, best first
    pub stories: Vec<StoryResponse>,
}

impl TopStoriesResponse {
    /// Creates a response from the proxy's story list
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories: stories.into_iter().map(StoryResponse::from).collect(),
        }
    }
}

/// Response body for the user endpoint (GET /users/{nickname})
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// The user's nickname
    pub nickname: String,
    /// Self-description
    pub about: String,
    /// Accumulated karma
    pub karma: u64,
    /// Account creation time as a Unix timestamp
    pub joined_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            nickname: user.nickname,
            about: user.about,
            karma: user.karma,
            joined_at: user.joined.timestamp(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
