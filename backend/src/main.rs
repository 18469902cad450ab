use std::sync::Arc;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pathway_backend::{build_pool, build_router, config::AppConfig, run_migrations, AppState};

const POOL_SIZE: u32 = 8;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set up database connection pool
    let pool = build_pool(&config.database_url, POOL_SIZE)?;
    run_migrations(&pool)?;

    let state = Arc::new(AppState::new(pool, &config));
    let app = build_router(state, &config);

    if config.admin_token.is_none() {
        info!("ADMIN_TOKEN not set, admin inquiry routes are disabled");
    }

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
