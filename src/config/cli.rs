use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the SpaceBox site binary.
#[derive(Debug, Parser)]
#[command(name = "spacebox", version, about = "SpaceBox Concepts website server")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "SPACEBOX_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the public HTTP server.
    Serve(Box<ServeArgs>),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    /// Override the listener host.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the listener port.
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Override the graceful shutdown timeout.
    #[arg(long = "server-graceful-shutdown-seconds", value_name = "SECONDS")]
    pub server_graceful_shutdown_seconds: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the content API base origin.
    #[arg(long = "content-api-base-url", value_name = "URL")]
    pub content_api_base_url: Option<String>,

    /// Override the content API request timeout.
    #[arg(long = "content-api-timeout-seconds", value_name = "SECONDS")]
    pub content_api_timeout_seconds: Option<u64>,

    /// Override the number of query results kept in memory.
    #[arg(long = "cache-capacity", value_name = "COUNT")]
    pub cache_capacity: Option<usize>,

    /// Override how long a cached query result stays fresh.
    #[arg(long = "cache-ttl-seconds", value_name = "SECONDS")]
    pub cache_ttl_seconds: Option<u64>,

    /// Override the maximum accepted resume size in bytes.
    #[arg(long = "uploads-max-resume-bytes", value_name = "BYTES")]
    pub uploads_max_resume_bytes: Option<u64>,

    /// Toggle smooth scrolling in rendered pages.
    #[arg(
        long = "scroll-enabled",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub scroll_enabled: Option<bool>,
}
