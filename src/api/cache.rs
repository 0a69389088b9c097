// SPDX-License-Identifier: MPL-2.0
//! Shared LRU cache of fetched shots.
//!
//! Re-opening a shot that was just shown in the feed or in a "more by author"
//! grid should not hit the network again. The cache is shared between the
//! client and the fetch tasks spawned by the UI, hence the `Arc<Mutex<..>>`.

use crate::domain::{Shot, ShotId};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Number of shots kept in memory before the least recently used is evicted.
pub const SHOT_CACHE_CAPACITY: usize = 64;

pub type SharedShotCache = Arc<Mutex<LruCache<ShotId, Shot>>>;

/// Creates the shared cache used by [`super::Client`].
pub fn create_shot_cache() -> SharedShotCache {
    let capacity = NonZeroUsize::new(SHOT_CACHE_CAPACITY).expect("capacity is non-zero");
    Arc::new(Mutex::new(LruCache::new(capacity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, AuthorId};
    use chrono::Utc;

    fn sample_shot(id: &str) -> Shot {
        Shot {
            id: ShotId::from(id),
            title: format!("shot {id}"),
            body: String::new(),
            created_at: Utc::now(),
            author: Author {
                id: AuthorId::from("a1"),
                name: "mira".to_owned(),
                avatar_url: None,
            },
        }
    }

    #[tokio::test]
    async fn cache_returns_inserted_shot() {
        let cache = create_shot_cache();
        let shot = sample_shot("s1");
        cache.lock().await.put(shot.id.clone(), shot.clone());

        let cached = cache.lock().await.get(&ShotId::from("s1")).cloned();
        assert_eq!(cached, Some(shot));
    }

    #[tokio::test]
    async fn cache_misses_unknown_id() {
        let cache = create_shot_cache();
        assert!(cache.lock().await.get(&ShotId::from("nope")).is_none());
    }
}
