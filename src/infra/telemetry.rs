use std::sync::Once;

use metrics::{Unit, describe_counter, describe_histogram};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "spacebox_query_cache_hit_total",
            Unit::Count,
            "Total number of query cache hits."
        );
        describe_counter!(
            "spacebox_query_cache_miss_total",
            Unit::Count,
            "Total number of query cache misses that started an upstream fetch."
        );
        describe_counter!(
            "spacebox_query_cache_coalesced_total",
            Unit::Count,
            "Total number of callers that joined an in-flight fetch for the same key."
        );
        describe_counter!(
            "spacebox_query_cache_evict_total",
            Unit::Count,
            "Total number of query results evicted due to capacity."
        );
        describe_counter!(
            "spacebox_query_cache_fetch_error_total",
            Unit::Count,
            "Total number of upstream fetches that settled with an error."
        );
        describe_histogram!(
            "spacebox_query_cache_fetch_ms",
            Unit::Milliseconds,
            "Upstream fetch latency in milliseconds."
        );
        describe_counter!(
            "spacebox_job_applications_total",
            Unit::Count,
            "Total number of job application submissions by outcome."
        );
    });
}
