//! Page props endpoint.
//!
//! The route handler is the boundary between HTTP and the page
//! resolver: it parses the language prefix, decides preview mode from
//! the supplied token, and returns the assembled props as JSON. Resolver
//! failures surface through [`crate::error::AppError`].

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use serde::Deserialize;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::language::Language;
use crate::resolver::PageProps;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct PageQueryString {
    preview: Option<String>,
}

/// Decide preview mode: a matching token enables the authenticated read
/// path; a wrong or absent token falls back to the public path.
fn preview_mode(state: &AppState, token: Option<&str>) -> bool {
    match token {
        Some(token) if state.is_valid_preview_token(token) => true,
        Some(_) => {
            warn!("ignoring invalid preview token");
            false
        }
        None => false,
    }
}

async fn resolve_language_root(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Query(query): Query<PageQueryString>,
) -> AppResult<Json<PageProps>> {
    resolve(&state, &language, None, query.preview.as_deref()).await
}

async fn resolve_page(
    State(state): State<AppState>,
    Path((language, rest)): Path<(String, String)>,
    Query(query): Query<PageQueryString>,
) -> AppResult<Json<PageProps>> {
    resolve(&state, &language, Some(&rest), query.preview.as_deref()).await
}

async fn resolve(
    state: &AppState,
    language: &str,
    rest: Option<&str>,
    preview_token: Option<&str>,
) -> AppResult<Json<PageProps>> {
    let language: Language = language
        .parse()
        .map_err(|e: crate::language::UnknownLanguage| AppError::BadRequest(e.to_string()))?;

    let path = match rest {
        Some(rest) => format!("/{language}/{}", rest.trim_matches('/')),
        None => format!("/{language}"),
    };

    let preview = preview_mode(state, preview_token);
    let props = state.resolver().resolve(&path, language, preview).await?;
    Ok(Json(props))
}

/// Create the page props router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{language}", get(resolve_language_root))
        .route("/{language}/{*path}", get(resolve_page))
}
