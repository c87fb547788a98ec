//! Stories Proxy
//!
//! Serves the current top stories, caching individual stories by id. The
//! id ranking itself is fetched fresh on every request; only the per-story
//! detail fetches are saved by the cache.

use serde::Serialize;
use tracing::debug;

use crate::cache::TtlCache;
use crate::error::{ProxyError, Result};
use crate::hn::{HnApi, HnClient, HnItem};

// == Domain Type ==
/// A HackerNews story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    /// The story's item id
    pub id: u64,
    /// Headline, empty if upstream omitted it
    pub title: String,
    /// Link target, empty for self posts
    pub url: String,
}

// == Stories Proxy ==
/// Caching lookup service for top stories.
#[derive(Debug, Clone)]
pub struct StoriesProxy<C = HnClient> {
    client: C,
    cache: TtlCache<u64, Story>,
}

impl<C: HnApi> StoriesProxy<C> {
    // == Constructor ==
    /// Creates a proxy over `client`, using `cache` for story lookups.
    pub fn new(client: C, cache: TtlCache<u64, Story>) -> Self {
        Self { client, cache }
    }

    // == Top Stories ==
    /// Returns up to `count` of the current top stories, best first.
    ///
    /// Each story id is looked up in the cache before fetching; misses are
    /// fetched one by one and cached for the next request.
    ///
    /// # Errors
    /// - [`ProxyError::Upstream`] when the id list or a story fetch fails
    /// - [`ProxyError::UpstreamData`] when a ranked id has no item behind it
    pub async fn top_stories(&self, count: usize) -> Result<Vec<Story>> {
        let ids = self.client.top_stories().await?;

        let mut stories = Vec::with_capacity(count.min(ids.len()));
        for id in ids.into_iter().take(count) {
            if let Some(story) = self.cache.get(&id).await {
                debug!(id, "story served from cache");
                stories.push(story);
                continue;
            }

            debug!(id, "story not cached, fetching from HackerNews");
            let story = self.fetch_story(id).await?;
            self.cache.insert(id, story.clone()).await;
            stories.push(story);
        }

        Ok(stories)
    }

    async fn fetch_story(&self, id: u64) -> Result<Story> {
        let item = self.client.item(id).await?.ok_or_else(|| {
            ProxyError::UpstreamData(format!("top story '{}' has no item upstream", id))
        })?;
        Ok(Story::from(item))
    }
}

impl From<HnItem> for Story {
    fn from(raw: HnItem) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::hn::HnUser;

    const TEST_TTL: Duration = Duration::from_secs(300);

    /// Scripted upstream serving a fixed ranking, counting item fetches.
    struct MockHn {
        top: Vec<u64>,
        item_calls: Arc<AtomicUsize>,
        missing_items: bool,
    }

    impl MockHn {
        fn with_ranking(top: Vec<u64>) -> Self {
            Self {
                top,
                item_calls: Arc::new(AtomicUsize::new(0)),
                missing_items: false,
            }
        }
    }

    #[async_trait]
    impl HnApi for MockHn {
        async fn top_stories(&self) -> Result<Vec<u64>> {
            Ok(self.top.clone())
        }

        async fn item(&self, id: u64) -> Result<Option<HnItem>> {
            self.item_calls.fetch_add(1, Ordering::SeqCst);
            if self.missing_items {
                return Ok(None);
            }
            Ok(Some(HnItem {
                id,
                title: Some(format!("story {}", id)),
                url: Some(format!("https://example.com/{}", id)),
            }))
        }

        async fn user(&self, _nickname: &str) -> Result<Option<HnUser>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_top_stories_fetches_and_caches() {
        let mock = MockHn::with_ranking(vec![1, 2, 3]);
        let item_calls = Arc::clone(&mock.item_calls);
        let cache = TtlCache::new(TEST_TTL);
        let proxy = StoriesProxy::new(mock, cache.clone());

        let stories = proxy.top_stories(2).await.unwrap();

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].id, 1);
        assert_eq!(stories[0].title, "story 1");
        assert_eq!(item_calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_second_request_fetches_only_uncached_ids() {
        let mock = MockHn::with_ranking(vec![1, 2, 3]);
        let item_calls = Arc::clone(&mock.item_calls);
        let proxy = StoriesProxy::new(mock, TtlCache::new(TEST_TTL));

        proxy.top_stories(2).await.unwrap();
        let stories = proxy.top_stories(3).await.unwrap();

        // Ids 1 and 2 came from the cache; only id 3 hit upstream.
        assert_eq!(stories.len(), 3);
        assert_eq!(item_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_count_is_bounded_by_ranking_length() {
        let proxy = StoriesProxy::new(MockHn::with_ranking(vec![1, 2]), TtlCache::new(TEST_TTL));

        let stories = proxy.top_stories(10).await.unwrap();

        assert_eq!(stories.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_item_is_an_error_and_not_cached() {
        let mut mock = MockHn::with_ranking(vec![1]);
        mock.missing_items = true;
        let cache = TtlCache::new(TEST_TTL);
        let proxy = StoriesProxy::new(mock, cache.clone());

        let result = proxy.top_stories(1).await;

        assert!(matches!(result, Err(ProxyError::UpstreamData(_))));
        assert!(cache.is_empty().await);
    }

    #[test]
    fn test_story_from_item_defaults() {
        let story = Story::from(HnItem {
            id: 7,
            title: None,
            url: None,
        });

        assert_eq!(story.title, "");
        assert_eq!(story.url, "");
    }
}
