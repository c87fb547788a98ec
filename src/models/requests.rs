//! Request DTOs for the proxy server API
//!
//! Defines the structure of incoming HTTP request parameters.

use serde::Deserialize;

use super::{DEFAULT_STORY_COUNT, MAX_STORY_COUNT};

/// Query parameters for the top stories endpoint (GET /stories)
///
/// # Fields
/// - `count`: How many stories to return (default 10, at most 500)
#[derive(Debug, Clone, Deserialize)]
pub struct TopStoriesParams {
    /// Number of stories requested
    #[serde(default)]
    pub count: Option<u32>,
}

impl TopStoriesParams {
    /// Validates the request parameters.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.count {
            Some(0) => Some("count must be at least 1".to_string()),
            Some(count) if count > MAX_STORY_COUNT => Some(format!(
                "count must not exceed {}",
                MAX_STORY_COUNT
            )),
            _ => None,
        }
    }

    /// The effective story count after applying the default.
    pub fn effective_count(&self) -> u32 {
        self.count.unwrap_or(DEFAULT_STORY_COUNT)
    }
}
