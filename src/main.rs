use std::{process, sync::Arc};

use spacebox::{
    application::{
        blog::BlogService, careers::CareerService, chrome::ChromeService, error::AppError,
        projects::ProjectService, scroll::ScrollCoordinator, site::SiteService,
    },
    cache::QueryCache,
    config,
    infra::{
        content_api::ContentApiClient,
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tokio::sync::watch;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::from(InfraError::configuration(err.to_string())))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
    }
}

struct ApplicationContext {
    http_state: HttpState,
    scroll: ScrollCoordinator,
}

fn build_application_context(settings: &config::Settings) -> Result<ApplicationContext, AppError> {
    let client = ContentApiClient::new(&settings.content_api)?;
    let endpoints = client.endpoints().clone();
    let client = Arc::new(client);
    let cache = QueryCache::new(settings.cache.clone());

    let scroll = ScrollCoordinator::new(settings.scroll.clone());
    let chrome = Arc::new(ChromeService::new(scroll.clone()));

    let blog = BlogService::new(client.clone(), cache.clone(), endpoints.clone());
    let projects = ProjectService::new(client.clone(), cache.clone(), endpoints);
    let careers = CareerService::new(
        client,
        cache,
        settings.uploads.max_resume_bytes.get(),
    );
    let site = Arc::new(SiteService::new(blog.clone()));

    let http_state = HttpState {
        chrome,
        site,
        blog: Arc::new(blog),
        projects: Arc::new(projects),
        careers: Arc::new(careers),
        admin_url: Arc::from(settings.site.admin_url.as_str()),
        apply_body_limit: settings.uploads.request_body_limit(),
    };

    Ok(ApplicationContext { http_state, scroll })
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let app = build_application_context(&settings)?;

    app.scroll.mount();
    let result = serve_http(&settings, app.http_state).await;
    app.scroll.teardown();

    result
}

async fn serve_http(settings: &config::Settings, http_state: HttpState) -> Result<(), AppError> {
    let router = http::build_router(http_state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(addr = %settings.server.addr, "listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let grace = settings.server.graceful_shutdown;

    let server = axum::serve(listener, router.into_make_service()).with_graceful_shutdown(
        async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        },
    );
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut server => return server_outcome(joined),
        _ = shutdown_rx.changed() => {}
    }

    info!(grace_secs = grace.as_secs(), "draining in-flight requests");
    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => server_outcome(joined),
        Err(_) => {
            warn!(
                grace_secs = grace.as_secs(),
                "graceful shutdown window elapsed; dropping open connections"
            );
            server.abort();
            Ok(())
        }
    }
}

fn server_outcome(
    joined: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    joined
        .map_err(|err| AppError::unexpected(format!("server task failed: {err}")))?
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
