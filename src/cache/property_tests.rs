//! Property-Based Tests for the TTL Cache
//!
//! Uses proptest to check the cache against a plain HashMap model over
//! arbitrary operation sequences. The TTL is long enough that no entry
//! expires while a sequence runs, so divergence from the model can only
//! come from the cache's own bookkeeping.

use std::collections::HashMap;
use std::time::Duration;

use proptest::prelude::*;

use crate::cache::TtlCache;

const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Small key space so sequences revisit keys often.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = u32> {
    any::<u32>()
}

/// A single cache operation.
#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, value: u32 },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Insert { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build test runtime")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // **Property: Model Consistency**
    // For any sequence of insert/get/remove operations, every get returns
    // exactly what a plain map would return, and the final entry count
    // matches the model.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        runtime().block_on(async {
            let cache = TtlCache::new(TEST_TTL);
            let mut model: HashMap<String, u32> = HashMap::new();

            for op in ops {
                match op {
                    CacheOp::Insert { key, value } => {
                        cache.insert(key.clone(), value).await;
                        model.insert(key, value);
                    }
                    CacheOp::Get { key } => {
                        prop_assert_eq!(cache.get(&key).await, model.get(&key).copied());
                    }
                    CacheOp::Remove { key } => {
                        cache.remove(&key).await;
                        model.remove(&key);
                    }
                }
            }

            prop_assert_eq!(cache.len().await, model.len());
            Ok(())
        })?;
    }

    // **Property: Timer Pairing**
    // A key has an armed expiry timer iff it has a cached value, after any
    // operation sequence. Stale timers from overwrites must not linger.
    #[test]
    fn prop_one_timer_per_live_entry(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        runtime().block_on(async {
            let cache = TtlCache::new(TEST_TTL);

            for op in ops {
                match op {
                    CacheOp::Insert { key, value } => cache.insert(key, value).await,
                    CacheOp::Get { key } => {
                        let _ = cache.get(&key).await;
                    }
                    CacheOp::Remove { key } => cache.remove(&key).await,
                }
            }

            prop_assert_eq!(cache.timer_count().await, cache.len().await);
            Ok(())
        })?;
    }

    // **Property: Overwrite Semantics**
    // Inserting V1 then V2 under the same key yields V2 and a single entry.
    #[test]
    fn prop_overwrite_returns_latest(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        runtime().block_on(async {
            let cache = TtlCache::new(TEST_TTL);

            cache.insert(key.clone(), value1).await;
            cache.insert(key.clone(), value2).await;

            prop_assert_eq!(cache.get(&key).await, Some(value2));
            prop_assert_eq!(cache.len().await, 1);
            Ok(())
        })?;
    }
}
