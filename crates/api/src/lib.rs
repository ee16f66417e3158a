//! HTTP API for saving and reading article list entries and content.
//!
//! Four fixed routes, each issuing exactly one store operation. Anything else
//! answers 404 `Not Found`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use article_store::ArticleStore;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Largest request body accepted by the save routes.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ArticleStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route(
            "/api/save_list",
            post(routes::articles::save::<S>).fallback(routes::not_found),
        )
        .route(
            "/api/save_content",
            post(routes::content::save::<S>).fallback(routes::not_found),
        )
        .route(
            "/api/list",
            get(routes::articles::list::<S>).fallback(routes::not_found),
        )
        .route(
            "/api/content",
            get(routes::content::get::<S>).fallback(routes::not_found),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a store.
pub fn create_state<S: ArticleStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
