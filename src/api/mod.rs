//! API Module
//!
//! HTTP handlers and routing for the proxy server REST API.
//!
//! # Endpoints
//! - `GET /stories?count=N` - Current top stories
//! - `GET /users/:nickname` - A user profile
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
