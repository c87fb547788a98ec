//! HN Proxy - A caching HackerNews proxy server
//!
//! Serves top stories and user profiles from the HackerNews API, with each
//! lookup path backed by its own TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod hn;
pub mod models;
pub mod proxy;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::Config;
