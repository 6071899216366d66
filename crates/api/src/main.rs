use std::net::SocketAddr;

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homelogger_api::config::ServerConfig;
use homelogger_api::router::build_app_router;
use homelogger_api::state::AppState;
use homelogger_db::repositories::SettingsRepo;
use homelogger_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "homelogger_api=debug,homelogger_db=info,tower_http=debug";

/// Only `-v`/`--version` and `--help`; everything else comes from the
/// environment (see `ServerConfig::from_env`).
fn cli() -> Command {
    Command::new("homelogger-api")
        .about("HomeLogger home inventory API server")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the database, migrate it and make sure the settings row exists.
/// Any failure here aborts startup.
async fn prepare_database(config: &ServerConfig) -> DbPool {
    let pool = homelogger_db::create_pool(&config.database_path)
        .await
        .expect("Failed to open database");
    homelogger_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    homelogger_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    let settings = SettingsRepo::ensure(&pool)
        .await
        .expect("Failed to initialise settings");

    tracing::info!(
        path = %config.database_path.display(),
        settings_id = settings.id,
        "Database ready"
    );
    pool
}

async fn seed_demo_data(pool: &DbPool, config: &ServerConfig) {
    let outcome =
        homelogger_db::demo::seed_if_empty(pool, &config.demo_data_path, &config.uploads_dir).await;
    match outcome {
        Ok(Some(report)) => tracing::info!(?report, "Demo data seeded"),
        Ok(None) => {}
        Err(e) => tracing::error!(
            error = %e,
            path = %config.demo_data_path.display(),
            "Demo seeding failed"
        ),
    }
}

#[tokio::main]
async fn main() {
    cli().get_matches();
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        uploads = %config.uploads_dir.display(),
        demo_mode = config.demo_mode,
        "Configuration loaded"
    );

    let pool = prepare_database(&config).await;

    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .expect("Failed to create uploads directory");

    if config.demo_mode {
        seed_demo_data(&pool, &config).await;
    }

    let app = build_app_router(AppState::new(pool, config.clone()), &config);

    let ip = config.host.parse().expect("Invalid HOST address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down");
}
