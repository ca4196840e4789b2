//! Application state shared across all handlers.

use std::sync::Arc;

use crate::client::{ContentClient, ContentFetch};
use crate::config::Config;
use crate::error::AppResult;
use crate::resolver::PageResolver;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    resolver: PageResolver,
}

impl AppState {
    /// Create state backed by the real content client.
    pub fn new(config: Config) -> AppResult<Self> {
        let client = ContentClient::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(client)))
    }

    /// Create state with an explicit fetcher (used by tests).
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn ContentFetch>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                resolver: PageResolver::new(fetcher),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn resolver(&self) -> &PageResolver {
        &self.inner.resolver
    }

    /// Whether a supplied preview token matches the configured one. A
    /// mismatch falls back to the public read path rather than erroring.
    pub fn is_valid_preview_token(&self, token: &str) -> bool {
        self.inner.config.preview_token.as_deref() == Some(token)
    }
}
