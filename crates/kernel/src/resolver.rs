//! Page resolver: assembles render-ready props for one route.
//!
//! The four content fetches (config, navigation, footer, page) share the
//! same language and preview flag and have no ordering dependency on
//! each other, so they run concurrently. Missing singletons resolve to
//! empty content; fetch failures of any of the four propagate to the
//! route boundary.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::try_join;
use tracing::{debug, warn};

use crate::client::{ContentFetch, Params};
use crate::content::{
    FooterContent, NavigationTree, PageContent, SiteConfig, SitemapItem, SitemapRow, find_route,
    group_sitemap,
};
use crate::error::{AppError, AppResult};
use crate::language::Language;
use crate::query;

/// Revalidation interval attached to statically generated pages.
pub const REVALIDATE_SECONDS: u32 = 10;

/// The route-level data contract: everything a page render needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    pub config: Option<SiteConfig>,
    pub navigation: NavigationTree,
    pub footer: FooterContent,
    pub page: Option<PageContent>,
    pub is_preview_mode: bool,
    pub sitemap_item: SitemapItem,
    pub revalidate: u32,
}

/// Resolves a single route into [`PageProps`].
#[derive(Clone)]
pub struct PageResolver {
    fetcher: Arc<dyn ContentFetch>,
}

impl PageResolver {
    pub fn new(fetcher: Arc<dyn ContentFetch>) -> Self {
        Self { fetcher }
    }

    /// Resolve one route render.
    ///
    /// When no sitemap entry matches the path, a not-found sitemap item
    /// is synthesized (with per-language paths) so the caller can render
    /// a localized not-found page; the page fetch then simply finds no
    /// document.
    pub async fn resolve(
        &self,
        path: &str,
        language: Language,
        preview: bool,
    ) -> AppResult<PageProps> {
        let sitemap_value = self
            .fetcher
            .fetch(&query::sitemap_query(preview), &Params::new(), preview)
            .await?;
        let rows: Vec<SitemapRow> = decode_or_default(sitemap_value)?;
        let sitemap = group_sitemap(rows);

        let sitemap_item = find_route(&sitemap, path, language).unwrap_or_else(|| {
            debug!(path, %language, "no sitemap entry, synthesizing not-found item");
            SitemapItem::not_found()
        });

        let mut page_params = Params::new();
        page_params.insert("path".to_string(), Value::String(path.to_string()));
        let no_params = Params::new();

        let config_query = query::config_query(language);
        let navigation_query = query::navigation_query(language);
        let footer_query = query::footer_query(language);
        let page_query = query::page_query(language, preview);
        let (config_value, navigation_value, footer_value, page_value) = try_join!(
            self.fetcher.fetch(&config_query, &no_params, preview),
            self.fetcher.fetch(&navigation_query, &no_params, preview),
            self.fetcher.fetch(&footer_query, &no_params, preview),
            self.fetcher.fetch(&page_query, &page_params, preview),
        )?;

        let config: Option<SiteConfig> = decode_optional(config_value)?;
        let navigation: NavigationTree = decode_or_default(navigation_value)?;
        let footer: FooterContent = decode_or_default(footer_value)?;
        let mut page: Option<PageContent> = decode_optional(page_value)?;

        if let Some(page) = page.as_mut() {
            page.normalize();
            let duplicates = page.duplicate_block_keys();
            if !duplicates.is_empty() {
                warn!(?duplicates, path, "page contains duplicate block keys");
            }
        }

        Ok(PageProps {
            config,
            navigation,
            footer,
            page,
            is_preview_mode: preview,
            sitemap_item,
            revalidate: REVALIDATE_SECONDS,
        })
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to decode content: {e}")))
}

/// Decode a possibly-missing document; null means "no document".
fn decode_optional<T: DeserializeOwned>(value: Value) -> AppResult<Option<T>> {
    if value.is_null() {
        Ok(None)
    } else {
        decode(value).map(Some)
    }
}

/// Decode a singleton that resolves to empty content when missing.
fn decode_or_default<T: DeserializeOwned + Default>(value: Value) -> AppResult<T> {
    if value.is_null() {
        Ok(T::default())
    } else {
        decode(value)
    }
}
