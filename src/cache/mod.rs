//! Cache Module
//!
//! Provides a generic in-memory cache whose entries expire after a fixed
//! time-to-live. Expiration is driven by one one-shot timer per key, so no
//! background sweep loop is needed.

mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use ttl::TtlCache;
