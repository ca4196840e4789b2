//! Vetrina content kernel.
//!
//! Composes GROQ queries per content type, executes them against a
//! headless content backend, resolves render-ready page props per route,
//! and generates design-token/safelist artifacts at build time. The
//! main entry point for running the server is the `vetrina` binary.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod language;
pub mod query;
pub mod resolver;
pub mod routes;
pub mod state;
pub mod theme;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::page::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
