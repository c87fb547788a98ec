//! Request and Response models for the proxy server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::TopStoriesParams;
pub use responses::{
    ErrorResponse, HealthResponse, StoryResponse, TopStoriesResponse, UserResponse,
};

// == Public Constants ==
/// Most stories a single request may ask for; the upstream ranking never
/// contains more than this many ids.
pub const MAX_STORY_COUNT: u32 = 500;

/// Stories returned when a request does not say how many it wants
pub const DEFAULT_STORY_COUNT: u32 = 10;
