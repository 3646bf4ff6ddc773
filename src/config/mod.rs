//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{net::SocketAddr, num::NonZeroU64, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::cache::QueryCacheConfig;

mod cli;

pub use cli::{CliArgs, Command, ServeArgs, ServeOverrides};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "spacebox";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GRACEFUL_SHUTDOWN_SECS: u64 = 30;
pub(crate) const DEFAULT_CONTENT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CONTENT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_ADMIN_URL: &str = "https://api.spaceboxconcepts.com/admin";
const DEFAULT_SCROLL_DURATION_SECS: f64 = 1.2;
const DEFAULT_SCROLL_TOUCH_MULTIPLIER: f64 = 2.0;

/// Fully-resolved deployment settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub content_api: ContentApiSettings,
    pub cache: QueryCacheConfig,
    pub uploads: UploadSettings,
    pub site: SiteSettings,
    pub scroll: ScrollSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub graceful_shutdown: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct ContentApiSettings {
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_resume_bytes: NonZeroU64,
}

impl UploadSettings {
    /// Request body ceiling for multipart submissions: the resume plus form overhead.
    pub fn request_body_limit(&self) -> usize {
        let limit = self.max_resume_bytes.get().saturating_add(64 * 1024);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub admin_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSettings {
    pub enabled: bool,
    pub duration_secs: f64,
    pub touch_multiplier: f64,
    pub reset_on_navigate: bool,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: DEFAULT_SCROLL_DURATION_SECS,
            touch_multiplier: DEFAULT_SCROLL_TOUCH_MULTIPLIER,
            reset_on_navigate: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("SPACEBOX").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Serve(args)) => raw.apply_serve_overrides(&args.overrides),
        None => raw.apply_serve_overrides(&ServeOverrides::default()),
    }

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    content_api: RawContentApiSettings,
    cache: RawCacheSettings,
    uploads: RawUploadSettings,
    site: RawSiteSettings,
    scroll: RawScrollSettings,
}

impl RawSettings {
    fn apply_serve_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }
        if let Some(seconds) = overrides.server_graceful_shutdown_seconds {
            self.server.graceful_shutdown_seconds = Some(seconds);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(url) = overrides.content_api_base_url.as_ref() {
            self.content_api.base_url = Some(url.clone());
        }
        if let Some(seconds) = overrides.content_api_timeout_seconds {
            self.content_api.request_timeout_secs = Some(seconds);
        }
        if let Some(capacity) = overrides.cache_capacity {
            self.cache.capacity = Some(capacity);
        }
        if let Some(seconds) = overrides.cache_ttl_seconds {
            self.cache.ttl_secs = Some(seconds);
        }
        if let Some(limit) = overrides.uploads_max_resume_bytes {
            self.uploads.max_resume_bytes = Some(limit);
        }
        if let Some(enabled) = overrides.scroll_enabled {
            self.scroll.enabled = Some(enabled);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            content_api,
            cache,
            uploads,
            site,
            scroll,
        } = raw;

        let server = build_server_settings(server)?;
        let logging = build_logging_settings(logging)?;
        let content_api = build_content_api_settings(content_api)?;
        let cache = build_cache_settings(cache)?;
        let uploads = build_upload_settings(uploads)?;
        let site = build_site_settings(site)?;
        let scroll = build_scroll_settings(scroll)?;

        Ok(Self {
            server,
            logging,
            content_api,
            cache,
            uploads,
            site,
            scroll,
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let addr =
        parse_socket_addr(&host, port).map_err(|reason| LoadError::invalid("server.addr", reason))?;

    let graceful_secs = server
        .graceful_shutdown_seconds
        .unwrap_or(DEFAULT_GRACEFUL_SHUTDOWN_SECS);
    if graceful_secs == 0 {
        return Err(LoadError::invalid(
            "server.graceful_shutdown_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ServerSettings {
        addr,
        graceful_shutdown: Duration::from_secs(graceful_secs),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_content_api_settings(
    content_api: RawContentApiSettings,
) -> Result<ContentApiSettings, LoadError> {
    let base_url = content_api
        .base_url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTENT_API_BASE_URL.to_string());

    let parsed = Url::parse(&base_url).map_err(|err| {
        LoadError::invalid("content_api.base_url", format!("invalid url: {err}"))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "content_api.base_url",
            "scheme must be http or https",
        ));
    }

    let timeout_secs = content_api
        .request_timeout_secs
        .unwrap_or(DEFAULT_CONTENT_API_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(LoadError::invalid(
            "content_api.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    Ok(ContentApiSettings {
        base_url,
        request_timeout: Duration::from_secs(timeout_secs),
    })
}

fn build_cache_settings(cache: RawCacheSettings) -> Result<QueryCacheConfig, LoadError> {
    let defaults = QueryCacheConfig::default();

    let capacity = cache.capacity.unwrap_or(defaults.capacity);
    if capacity == 0 {
        return Err(LoadError::invalid(
            "cache.capacity",
            "must be greater than zero",
        ));
    }

    let ttl_secs = cache.ttl_secs.unwrap_or(defaults.ttl_secs);
    let fetch_timeout_secs = cache
        .fetch_timeout_secs
        .unwrap_or(defaults.fetch_timeout_secs);
    if fetch_timeout_secs == 0 {
        return Err(LoadError::invalid(
            "cache.fetch_timeout_secs",
            "must be greater than zero",
        ));
    }

    Ok(QueryCacheConfig {
        capacity,
        ttl_secs,
        fetch_timeout_secs,
    })
}

fn build_upload_settings(uploads: RawUploadSettings) -> Result<UploadSettings, LoadError> {
    let max_resume_bytes_value = uploads
        .max_resume_bytes
        .unwrap_or(DEFAULT_MAX_RESUME_BYTES);
    let max_resume_bytes = NonZeroU64::new(max_resume_bytes_value).ok_or_else(|| {
        LoadError::invalid("uploads.max_resume_bytes", "must be greater than zero")
    })?;
    usize::try_from(max_resume_bytes_value).map_err(|_| {
        LoadError::invalid(
            "uploads.max_resume_bytes",
            "value exceeds supported range for usize",
        )
    })?;

    Ok(UploadSettings { max_resume_bytes })
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let admin_url = site
        .admin_url
        .unwrap_or_else(|| DEFAULT_ADMIN_URL.to_string());
    Url::parse(&admin_url)
        .map_err(|err| LoadError::invalid("site.admin_url", format!("invalid url: {err}")))?;

    Ok(SiteSettings { admin_url })
}

fn build_scroll_settings(scroll: RawScrollSettings) -> Result<ScrollSettings, LoadError> {
    let defaults = ScrollSettings::default();

    let duration_secs = scroll.duration_secs.unwrap_or(defaults.duration_secs);
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(LoadError::invalid(
            "scroll.duration_secs",
            "must be a positive number",
        ));
    }

    let touch_multiplier = scroll.touch_multiplier.unwrap_or(defaults.touch_multiplier);
    if !touch_multiplier.is_finite() || touch_multiplier <= 0.0 {
        return Err(LoadError::invalid(
            "scroll.touch_multiplier",
            "must be a positive number",
        ));
    }

    Ok(ScrollSettings {
        enabled: scroll.enabled.unwrap_or(defaults.enabled),
        duration_secs,
        touch_multiplier,
        reset_on_navigate: scroll
            .reset_on_navigate
            .unwrap_or(defaults.reset_on_navigate),
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
    graceful_shutdown_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawContentApiSettings {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCacheSettings {
    capacity: Option<usize>,
    ttl_secs: Option<u64>,
    fetch_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawUploadSettings {
    max_resume_bytes: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    admin_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawScrollSettings {
    enabled: Option<bool>,
    duration_secs: Option<f64>,
    touch_multiplier: Option<f64>,
    reset_on_navigate: Option<bool>,
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|err| format!("invalid address `{candidate}`: {err}"))
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[cfg(test)]
mod tests;
