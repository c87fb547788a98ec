//! HackerNews Upstream Module
//!
//! Client for the HackerNews Firebase API and the trait the proxies consume
//! it through.
//!
//! # Endpoints
//! - `GET /topstories.json` - Ids of the current top stories
//! - `GET /item/{id}.json` - A single item (story, comment, ...)
//! - `GET /user/{name}.json` - A user profile, `null` when unknown

mod client;

pub use client::{HnApi, HnClient, HnItem, HnUser, HN_BASE_URL};
