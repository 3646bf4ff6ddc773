//! Key-bound subscribers over the query cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::repos::FetchError;

use super::keys::QueryKey;
use super::lock::mutex_lock;
use super::state::QueryState;
use super::store::QueryCache;

const SOURCE: &str = "cache::observer";

/// Fetches the value for a key; shared by every issue of one observer.
pub type QueryFn<T> =
    Arc<dyn Fn(QueryKey) -> BoxFuture<'static, Result<T, FetchError>> + Send + Sync>;

/// Follows one key at a time and publishes its state.
///
/// Every issued fetch carries a generation number. A result is published
/// only while its generation is still the latest, so a slow response for a
/// previous key never overwrites the state of the current one.
///
/// Page handlers resolve one key per request through [`QueryCache::fetch`]
/// and never change it mid-flight. The observer is the library entry point
/// for long-lived consumers that do, such as a streaming view following a
/// user's selection.
pub struct QueryObserver<T> {
    cache: QueryCache,
    query: QueryFn<T>,
    key: Mutex<Option<QueryKey>>,
    generation: Arc<AtomicU64>,
    sender: Arc<watch::Sender<QueryState<T>>>,
}

impl<T> QueryObserver<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(cache: QueryCache, query: QueryFn<T>) -> Self {
        let (sender, _) = watch::channel(QueryState::idle());
        Self {
            cache,
            query,
            key: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
            sender: Arc::new(sender),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> QueryState<T> {
        self.sender.borrow().clone()
    }

    pub fn key(&self) -> Option<QueryKey> {
        mutex_lock(&self.key, SOURCE, "key").clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Bind the observer to `key`, issuing a fetch when the key changed.
    ///
    /// Returns the handle of the issued fetch, or `None` for an unchanged key.
    pub fn set_key(&self, key: QueryKey) -> Option<JoinHandle<()>> {
        let generation = {
            let mut current = mutex_lock(&self.key, SOURCE, "set_key");
            if current.as_ref() == Some(&key) {
                return None;
            }
            *current = Some(key.clone());

            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let previous = self.cache.peek::<T>(&key).data();
            self.sender.send_replace(QueryState::loading(previous));
            generation
        };

        let cache = self.cache.clone();
        let query = Arc::clone(&self.query);
        let latest = Arc::clone(&self.generation);
        let sender = Arc::clone(&self.sender);

        Some(tokio::spawn(async move {
            let fetch_key = key.clone();
            let state = cache.fetch(key, move || query(fetch_key)).await;
            sender.send_if_modified(|published| {
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *published = state;
                true
            });
        }))
    }
}
