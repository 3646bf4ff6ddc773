use std::collections::HashSet;
use std::time::Duration;

use axum::http::StatusCode;
use metrics_util::debugging::DebuggingRecorder;
use serial_test::serial;
use spacebox::application::repos::{FetchError, Resource};
use spacebox::cache::{QueryCache, QueryCacheConfig, QueryKey};

#[tokio::test]
#[serial]
async fn query_cache_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let cache = QueryCache::new(QueryCacheConfig {
        capacity: 1,
        ..QueryCacheConfig::default()
    });

    // miss, then hit
    for _ in 0..2 {
        cache
            .fetch(QueryKey::ProjectList, || async {
                Ok::<_, FetchError>(vec![1_i64, 2, 3])
            })
            .await;
    }

    // coalesced join of an in-flight fetch
    let slow = || async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        Ok::<_, FetchError>("fresh".to_string())
    };
    tokio::join!(
        cache.fetch(QueryKey::BlogDetail("slow".into()), slow),
        cache.fetch(QueryKey::BlogDetail("slow".into()), slow),
    );

    // failed fetch
    cache
        .fetch(QueryKey::JobList, || async {
            Err::<Vec<String>, _>(FetchError::status_error(
                Resource::JobList,
                StatusCode::BAD_GATEWAY,
                "down",
            ))
        })
        .await;

    let names: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(composite_key, _, _, _)| composite_key.key().name().to_string())
        .collect();

    let expected = [
        "spacebox_query_cache_hit_total",
        "spacebox_query_cache_miss_total",
        "spacebox_query_cache_coalesced_total",
        "spacebox_query_cache_evict_total",
        "spacebox_query_cache_fetch_error_total",
        "spacebox_query_cache_fetch_ms",
    ];

    for metric in expected {
        assert!(names.contains(metric), "missing metric: {metric}");
    }
}
