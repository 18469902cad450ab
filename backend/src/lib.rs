use std::sync::Arc;
use axum::{
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

pub mod config;
pub mod error;
pub mod schema;
pub mod handlers {
    pub mod admin_handlers;
    pub mod auth_middleware;
    pub mod inquiry_handlers;
}
pub mod models {
    pub mod inquiry_models;
}
pub mod repositories {
    pub mod inquiry_repository;
}

use config::AppConfig;
use error::ApiError;
use handlers::{admin_handlers, auth_middleware, inquiry_handlers};
use repositories::inquiry_repository::InquiryRepository;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct AppState {
    pub inquiry_repository: Arc<InquiryRepository>,
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(pool: DbPool, config: &AppConfig) -> Self {
        Self {
            inquiry_repository: Arc::new(InquiryRepository::new(pool)),
            admin_token: config.admin_token.clone(),
        }
    }
}

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder().max_size(max_size).build(manager)
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        info!("Applied migration {}", version);
    }
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn unknown_api_route() -> ApiError {
    ApiError::UnknownRoute
}

pub fn build_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    let admin_routes = Router::new()
        .route("/admin/inquiries", get(admin_handlers::list_inquiries))
        .route("/admin/inquiries/unread-count", get(admin_handlers::unread_count))
        .route("/admin/inquiries/{inquiry_id}", get(admin_handlers::get_inquiry))
        .route("/admin/inquiries/{inquiry_id}/read", post(admin_handlers::mark_inquiry_read))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware::require_admin));

    // Unknown API paths answer with JSON, never with the SPA shell.
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/inquiries", post(inquiry_handlers::create_inquiry))
        .merge(admin_routes)
        .fallback(unknown_api_route);

    let allow_origin = match config
        .frontend_url
        .as_deref()
        .and_then(|url| HeaderValue::from_str(url).ok())
    {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };

    let mut app = Router::new().nest("/api", api_routes);

    if let Some(dir) = &config.static_dir {
        // Client-side routes fall through to the SPA entry point.
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(allow_origin)
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .expose_headers([header::CONTENT_TYPE])
        )
        .with_state(state)
}
