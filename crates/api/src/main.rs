use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use clap::Parser;
use folio_api::auth::password::hash_password;
use folio_api::cli::{Cli, Command};
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "folio_api=debug,folio_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    match Cli::parse().command() {
        Command::HashPassword { password } => {
            println!("{}", hash_password(&password).expect("Failed to hash password"));
        }
        Command::Serve => serve().await,
    }
}

async fn serve() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        site_url = %config.site_url,
        admin = %config.admin.username,
        "Loaded server configuration"
    );

    let pool = connect_database().await;

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Serving portfolio site");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Shutdown complete");
}

/// `RUST_LOG` filtering; `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Connect, confirm the database answers, and apply pending migrations.
async fn connect_database() -> folio_db::DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = folio_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    folio_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database ready, migrations applied");
    pool
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
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
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining connections");
}
