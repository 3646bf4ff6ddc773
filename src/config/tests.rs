use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_point_at_local_content_api() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.content_api.base_url, DEFAULT_CONTENT_API_BASE_URL);
    assert_eq!(settings.content_api.request_timeout, Duration::from_secs(10));
    assert_eq!(settings.server.addr.port(), DEFAULT_PORT);
    assert_eq!(settings.site.admin_url, DEFAULT_ADMIN_URL);
}

#[test]
fn resume_limit_defaults_to_10_mib() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    assert_eq!(
        settings.uploads.max_resume_bytes.get(),
        DEFAULT_MAX_RESUME_BYTES
    );
    assert!(settings.uploads.request_body_limit() > DEFAULT_MAX_RESUME_BYTES as usize);
}

#[test]
fn resume_limit_can_be_overridden_via_cli() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        uploads_max_resume_bytes: Some(1_572_864),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.uploads.max_resume_bytes.get(), 1_572_864);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn content_api_rejects_non_http_scheme() {
    let mut raw = RawSettings::default();
    raw.content_api.base_url = Some("ftp://content.example".to_string());

    let err = Settings::from_raw(raw).expect_err("ftp must be rejected");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "content_api.base_url",
            ..
        }
    ));
}

#[test]
fn zero_cache_capacity_is_invalid() {
    let mut raw = RawSettings::default();
    raw.cache.capacity = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero capacity must be rejected");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "cache.capacity",
            ..
        }
    ));
}

#[test]
fn scroll_settings_follow_defaults_and_reject_non_positive_duration() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    assert_eq!(settings.scroll, ScrollSettings::default());
    assert_eq!(settings.scroll.duration_secs, 1.2);
    assert_eq!(settings.scroll.touch_multiplier, 2.0);

    let mut raw = RawSettings::default();
    raw.scroll.duration_secs = Some(0.0);
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["spacebox"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "spacebox",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--content-api-base-url",
        "https://api.spaceboxconcepts.com",
        "--scroll-enabled",
        "false",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(
                serve.overrides.content_api_base_url.as_deref(),
                Some("https://api.spaceboxconcepts.com")
            );
            assert_eq!(serve.overrides.scroll_enabled, Some(false));
        }
    }
}
