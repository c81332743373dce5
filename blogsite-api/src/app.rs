/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use blogsite_api::{app::AppState, config::Config};
/// use blogsite_shared::store::postgres::{PgStore, StoreConfig};
/// use std::sync::Arc;
/// use tower_sessions::MemoryStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let store = PgStore::connect(StoreConfig {
///     url: config.database.url.clone(),
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(Arc::new(store), config);
/// let app = blogsite_api::app::build_router(state, MemoryStore::default());
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{middleware, routing::get, Router};
use blogsite_shared::{auth::middleware::require_session, store::AccountStore};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Persistence service handle
    pub store: Arc<dyn AccountStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Arc<dyn AccountStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /signup, /login, /success, /error   # public pages
/// ├── POST /signup, /login                     # account service
/// ├── GET  /logout                             # session teardown
/// ├── GET  /health                             # health check (public)
/// └── protected (session gate → redirect /login)
///     ├── GET  /home, /createBlog              # pages
///     ├── POST /createBlog                     # append post
///     └── GET  /viewBlogs, /allBlogs           # post listings
/// ```
///
/// # Middleware Stack
///
/// Applied in order (outermost first):
/// 1. Session management (tower-sessions)
/// 2. Logging (tower-http TraceLayer)
/// 3. Authentication gate (protected routes only)
pub fn build_router(state: AppState, session_store: MemoryStore) -> Router {
    use crate::routes;

    // Session cookies travel over plain HTTP in the default deployment.
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    // Public routes (no session required)
    let public_routes = Router::new()
        .route(
            "/signup",
            get(routes::pages::signup_page).post(routes::auth::signup),
        )
        .route(
            "/login",
            get(routes::pages::login_page).post(routes::auth::login),
        )
        .route("/logout", get(routes::auth::logout))
        .route("/success", get(routes::pages::success_page))
        .route("/error", get(routes::pages::error_page))
        .route("/health", get(routes::health::health_check));

    // Protected routes (session gate applies uniformly)
    let protected_routes = Router::new()
        .route("/home", get(routes::pages::home_page))
        .route(
            "/createBlog",
            get(routes::pages::create_blog_page).post(routes::blog::create_blog),
        )
        .route("/viewBlogs", get(routes::blog::view_blogs))
        .route("/allBlogs", get(routes::blog::all_blogs))
        .route_layer(middleware::from_fn(require_session));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(session_layer)
        .with_state(state)
}
