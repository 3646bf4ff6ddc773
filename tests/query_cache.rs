use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::http::StatusCode;
use futures::FutureExt;
use futures::future::join_all;
use spacebox::application::repos::{FetchError, Resource};
use spacebox::cache::{QueryCache, QueryCacheConfig, QueryFn, QueryKey, QueryObserver};

fn cache() -> QueryCache {
    QueryCache::new(QueryCacheConfig::default())
}

#[tokio::test]
async fn concurrent_reads_share_one_fetch() {
    let cache = cache();
    let calls = Arc::new(AtomicUsize::new(0));

    let reads = (0..8).map(|_| {
        let calls = Arc::clone(&calls);
        cache.fetch(QueryKey::BlogList, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<_, FetchError>(vec!["first".to_string(), "second".to_string()])
        })
    });
    let states = join_all(reads).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    for state in states {
        assert!(state.is_success());
        assert_eq!(state.data_or_default().len(), 2);
    }
}

#[tokio::test]
async fn fresh_entries_skip_the_fetcher() {
    let cache = cache();
    let calls = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let calls = Arc::clone(&calls);
        let state = cache
            .fetch(QueryKey::ProjectDetail(4), move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, FetchError>(4_i64)
            })
            .await;
        assert_eq!(state.data().as_deref(), Some(&4));
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let cache = cache();
    let calls = Arc::new(AtomicUsize::new(0));

    let failing = {
        let calls = Arc::clone(&calls);
        cache
            .fetch(QueryKey::JobList, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<Vec<String>, _>(FetchError::status_error(
                    Resource::JobList,
                    StatusCode::NOT_FOUND,
                    "missing",
                ))
            })
            .await
    };
    assert!(failing.is_error());
    assert!(!failing.is_loading());
    assert!(failing.data_or_default().is_empty());

    let recovered = {
        let calls = Arc::clone(&calls);
        cache
            .fetch(QueryKey::JobList, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, FetchError>(vec!["Designer".to_string()])
            })
            .await
    };
    assert!(recovered.is_success());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn observer_publishes_only_the_latest_key() {
    let cache = cache();
    let query: QueryFn<String> = Arc::new(|key: QueryKey| {
        async move {
            let delay = match &key {
                QueryKey::BlogDetail(slug) if slug == "slow" => 200,
                _ => 10,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok::<_, FetchError>(key.to_string())
        }
        .boxed()
    });
    let observer = QueryObserver::new(cache.clone(), query);

    let slow = observer
        .set_key(QueryKey::BlogDetail("slow".to_string()))
        .expect("new key issues a fetch");
    let fast = observer
        .set_key(QueryKey::BlogDetail("fast".to_string()))
        .expect("new key issues a fetch");
    assert!(observer.current().is_loading());

    fast.await.expect("fast fetch task");
    slow.await.expect("slow fetch task");

    let state = observer.current();
    assert!(state.is_success());
    assert_eq!(state.data().as_deref().map(String::as_str), Some("blogDetail:fast"));
    assert_eq!(observer.generation(), 2);

    // The stale result still lands in the cache for later readers.
    let stale = cache.peek::<String>(&QueryKey::BlogDetail("slow".to_string()));
    assert!(stale.is_success());
}

#[tokio::test]
async fn observer_ignores_unchanged_key() {
    let query: QueryFn<String> =
        Arc::new(|key: QueryKey| async move { Ok::<_, FetchError>(key.to_string()) }.boxed());
    let observer = QueryObserver::new(cache(), query);

    let handle = observer.set_key(QueryKey::JobDetail(9));
    assert!(handle.is_some());
    assert!(observer.set_key(QueryKey::JobDetail(9)).is_none());
    assert_eq!(observer.key(), Some(QueryKey::JobDetail(9)));
}
