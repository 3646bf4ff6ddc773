//! Keyed, deduplicating query cache.
//!
//! Each key has at most one upstream fetch in flight. Callers arriving while
//! it runs join the same shared future; the fetch itself runs in a spawned
//! task, so it settles and populates the store even if every caller is gone.
//! Only successes are stored; failures reach the waiters of that one fetch
//! and nothing else.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use lru::LruCache;
use metrics::{counter, histogram};
use tracing::{debug, warn};

use crate::application::repos::FetchError;

use super::config::QueryCacheConfig;
use super::keys::QueryKey;
use super::lock::{mutex_lock, rw_read, rw_write};
use super::state::QueryState;

const SOURCE: &str = "cache::store";

const METRIC_HIT: &str = "spacebox_query_cache_hit_total";
const METRIC_MISS: &str = "spacebox_query_cache_miss_total";
const METRIC_COALESCED: &str = "spacebox_query_cache_coalesced_total";
const METRIC_EVICT: &str = "spacebox_query_cache_evict_total";
const METRIC_FETCH_ERROR: &str = "spacebox_query_cache_fetch_error_total";
const METRIC_FETCH_MS: &str = "spacebox_query_cache_fetch_ms";

type Erased = Arc<dyn Any + Send + Sync>;
type SharedFetch = Shared<BoxFuture<'static, Result<Erased, FetchError>>>;

struct Entry {
    value: Erased,
    fetched_at: Instant,
}

struct InFlight {
    id: u64,
    fetch: SharedFetch,
}

struct Inner {
    config: QueryCacheConfig,
    entries: RwLock<LruCache<QueryKey, Entry>>,
    in_flight: Mutex<HashMap<QueryKey, InFlight>>,
    next_fetch_id: AtomicU64,
}

/// Process-wide query cache handle; clones share one store.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("config", &self.inner.config)
            .field("len", &self.len())
            .finish()
    }
}

impl QueryCache {
    pub fn new(config: QueryCacheConfig) -> Self {
        let entries = LruCache::new(config.capacity_non_zero());
        Self {
            inner: Arc::new(Inner {
                config,
                entries: RwLock::new(entries),
                in_flight: Mutex::new(HashMap::new()),
                next_fetch_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &QueryCacheConfig {
        &self.inner.config
    }

    /// Resolve `key`, running `fetcher` only when no fresh value or in-flight fetch exists.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        if let Some(value) = self.inner.fresh(&key) {
            counter!(METRIC_HIT, "query" => key.name()).increment(1);
            return downcast_state(&key, Ok(value));
        }

        let shared = {
            let mut in_flight = mutex_lock(&self.inner.in_flight, SOURCE, "fetch.in_flight");
            if let Some(value) = self.inner.fresh(&key) {
                counter!(METRIC_HIT, "query" => key.name()).increment(1);
                return downcast_state(&key, Ok(value));
            }

            match in_flight.get(&key) {
                Some(existing) => {
                    counter!(METRIC_COALESCED, "query" => key.name()).increment(1);
                    debug!(target = SOURCE, %key, "joined in-flight fetch");
                    existing.fetch.clone()
                }
                None => {
                    counter!(METRIC_MISS, "query" => key.name()).increment(1);
                    let id = self.inner.next_fetch_id.fetch_add(1, Ordering::Relaxed);
                    let fetch = self.spawn_fetch(key.clone(), id, fetcher());
                    in_flight.insert(
                        key.clone(),
                        InFlight {
                            id,
                            fetch: fetch.clone(),
                        },
                    );
                    fetch
                }
            }
        };

        downcast_state(&key, shared.await)
    }

    /// Current state of `key` without triggering a fetch.
    pub fn peek<T>(&self, key: &QueryKey) -> QueryState<T>
    where
        T: Send + Sync + 'static,
    {
        let cached = self
            .inner
            .fresh(key)
            .and_then(|value| value.downcast::<T>().ok());
        let loading = mutex_lock(&self.inner.in_flight, SOURCE, "peek.in_flight").contains_key(key);

        match (loading, cached) {
            (true, data) => QueryState::loading(data),
            (false, Some(data)) => QueryState::success(data),
            (false, None) => QueryState::idle(),
        }
    }

    pub fn invalidate(&self, key: &QueryKey) {
        rw_write(&self.inner.entries, SOURCE, "invalidate").pop(key);
    }

    pub fn clear(&self) {
        rw_write(&self.inner.entries, SOURCE, "clear").clear();
    }

    pub fn len(&self) -> usize {
        rw_read(&self.inner.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn spawn_fetch<T, Fut>(&self, key: QueryKey, id: u64, future: Fut) -> SharedFetch
    where
        T: Send + Sync + 'static,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let resource = key.resource();
        let task = tokio::spawn(async move {
            let started_at = Instant::now();
            let result = match tokio::time::timeout(inner.config.fetch_timeout(), future).await {
                Ok(result) => result.map(|value| Arc::new(value) as Erased),
                Err(_) => Err(FetchError::Timeout { resource }),
            };
            histogram!(METRIC_FETCH_MS, "query" => key.name())
                .record(started_at.elapsed().as_secs_f64() * 1000.0);

            match &result {
                Ok(value) => inner.store(&key, Arc::clone(value)),
                Err(err) => {
                    counter!(METRIC_FETCH_ERROR, "query" => key.name()).increment(1);
                    warn!(
                        target = SOURCE,
                        %key,
                        error = %err,
                        detail = %err.diagnostic(),
                        "Query fetch failed"
                    );
                }
            }

            inner.finish(&key, id);
            result
        });

        async move {
            match task.await {
                Ok(result) => result,
                Err(join_error) => Err(FetchError::transport(resource, join_error)),
            }
        }
        .boxed()
        .shared()
    }
}

impl Inner {
    fn fresh(&self, key: &QueryKey) -> Option<Erased> {
        let mut entries = rw_write(&self.entries, SOURCE, "fresh");
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() < self.config.ttl() {
            return Some(Arc::clone(&entry.value));
        }
        entries.pop(key);
        None
    }

    fn store(&self, key: &QueryKey, value: Erased) {
        let entry = Entry {
            value,
            fetched_at: Instant::now(),
        };
        let displaced = rw_write(&self.entries, SOURCE, "store").push(key.clone(), entry);
        if let Some((evicted, _)) = displaced
            && evicted != *key
        {
            counter!(METRIC_EVICT, "query" => evicted.name()).increment(1);
        }
    }

    fn finish(&self, key: &QueryKey, id: u64) {
        let mut in_flight = mutex_lock(&self.in_flight, SOURCE, "finish");
        if in_flight.get(key).is_some_and(|entry| entry.id == id) {
            in_flight.remove(key);
        }
    }
}

fn downcast_state<T>(key: &QueryKey, result: Result<Erased, FetchError>) -> QueryState<T>
where
    T: Send + Sync + 'static,
{
    match result {
        Ok(value) => match value.downcast::<T>() {
            Ok(data) => QueryState::success(data),
            Err(_) => QueryState::failed(FetchError::decode(
                key.resource(),
                format!("cached value for `{key}` has an unexpected type"),
            )),
        },
        Err(error) => QueryState::failed(error),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use axum::http::StatusCode;

    use super::*;
    use crate::application::repos::Resource;
    use crate::cache::state::QueryStatus;

    fn cache(capacity: usize, ttl_secs: u64) -> QueryCache {
        QueryCache::new(QueryCacheConfig {
            capacity,
            ttl_secs,
            fetch_timeout_secs: 5,
        })
    }

    #[tokio::test]
    async fn capacity_evicts_least_recent_key() {
        let cache = cache(1, 60);
        cache
            .fetch(QueryKey::JobDetail(1), || async { Ok(1_u8) })
            .await;
        cache
            .fetch(QueryKey::JobDetail(2), || async { Ok(2_u8) })
            .await;

        assert_eq!(cache.len(), 1);
        assert!(matches!(
            cache.peek::<u8>(&QueryKey::JobDetail(1)).status(),
            QueryStatus::Idle
        ));
        assert!(cache.peek::<u8>(&QueryKey::JobDetail(2)).is_success());
    }

    #[tokio::test]
    async fn expired_entry_is_refetched() {
        let cache = cache(8, 0);
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            cache
                .fetch(QueryKey::BlogList, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Vec::<u8>::new())
                })
                .await;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn slow_fetch_times_out() {
        let cache = QueryCache::new(QueryCacheConfig {
            capacity: 4,
            ttl_secs: 60,
            fetch_timeout_secs: 0,
        });

        let state = cache
            .fetch(QueryKey::ProjectList, || async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(Vec::<u8>::new())
            })
            .await;

        assert!(matches!(
            state.error(),
            Some(FetchError::Timeout {
                resource: Resource::ProjectList
            })
        ));
    }

    #[tokio::test]
    async fn invalidate_forces_next_fetch() {
        let cache = cache(8, 60);
        cache
            .fetch(QueryKey::JobList, || async { Ok(vec![1_u8]) })
            .await;
        assert!(cache.peek::<Vec<u8>>(&QueryKey::JobList).is_success());

        cache.invalidate(&QueryKey::JobList);
        assert!(!cache.peek::<Vec<u8>>(&QueryKey::JobList).is_success());

        let state = cache
            .fetch(QueryKey::JobList, || async {
                Err::<Vec<u8>, _>(FetchError::status_error(
                    Resource::JobList,
                    StatusCode::BAD_GATEWAY,
                    "",
                ))
            })
            .await;
        assert!(state.is_error());
    }

    #[tokio::test]
    async fn clear_drops_every_entry() {
        let cache = cache(8, 60);
        for id in 1..=3 {
            cache
                .fetch(QueryKey::ProjectDetail(id), move || async move { Ok(id) })
                .await;
        }
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn mismatched_type_reports_decode_error() {
        let cache = cache(8, 60);
        cache
            .fetch(QueryKey::BlogList, || async { Ok(vec![1_u8]) })
            .await;

        let state = cache
            .fetch(QueryKey::BlogList, || async { Ok(String::new()) })
            .await;
        assert!(matches!(state.error(), Some(FetchError::Decode { .. })));
    }
}
