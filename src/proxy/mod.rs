//! Proxy Module
//!
//! Caching front-ends over the HackerNews API. Each proxy owns its own
//! [`TtlCache`](crate::cache::TtlCache), consulted before any upstream
//! fetch; misses fetch and then populate the cache.

mod stories;
mod users;

pub use stories::{StoriesProxy, Story};
pub use users::{User, UserProxy};
