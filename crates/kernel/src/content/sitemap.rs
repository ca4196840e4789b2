//! Sitemap entries and route lookup.
//!
//! The sitemap query returns one flat row per page document and
//! language. Rows for translations of the same logical page share a base
//! id (`<base>__i18n_<lang>`); grouping them yields one [`SitemapItem`]
//! per logical page with per-language paths, titles, and visibility.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A flat sitemap row as returned by the sitemap query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapRow {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub path: String,
    pub language: String,
    #[serde(default)]
    pub exclude_from_sitemap: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Per-route metadata used for routing and not-found resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub type_name: String,
    pub title: String,
    pub path: String,
    #[serde(rename = "_updatedAt")]
    pub updated_at: Option<String>,
    pub paths: BTreeMap<Language, String>,
    pub titles: BTreeMap<Language, String>,
    #[serde(rename = "excludeFromSitemap")]
    pub exclude_from_sitemap: BTreeMap<Language, bool>,
}

impl SitemapItem {
    /// Synthesized entry for routes with no matching page, so callers can
    /// still render a localized not-found page. Carries a path for every
    /// configured language and is excluded from the sitemap everywhere.
    pub fn not_found() -> Self {
        let mut paths = BTreeMap::new();
        let mut titles = BTreeMap::new();
        let mut exclude = BTreeMap::new();
        for language in Language::ALL {
            paths.insert(language, format!("/{language}"));
            titles.insert(language, format!("/{language}"));
            exclude.insert(language, true);
        }
        Self {
            id: "page_notfound".to_string(),
            type_name: "page.notfound".to_string(),
            title: String::new(),
            path: String::new(),
            updated_at: None,
            paths,
            titles,
            exclude_from_sitemap: exclude,
        }
    }
}

/// The logical page id shared by all translations of a document:
/// `page_x__i18n_en` and `page_x__i18n_it` both map to `page_x`. A draft
/// prefix is stripped so a draft groups with its published original.
fn base_id(id: &str) -> String {
    let id = id.strip_prefix("drafts.").unwrap_or(id);
    match id.find("__i18n_") {
        Some(pos) => id[..pos].to_string(),
        None => id.to_string(),
    }
}

/// Group flat sitemap rows into one item per logical page. Rows with an
/// unsupported language code are skipped.
pub fn group_sitemap(rows: Vec<SitemapRow>) -> Vec<SitemapItem> {
    let mut grouped: BTreeMap<String, SitemapItem> = BTreeMap::new();

    for row in rows {
        let Ok(language) = row.language.parse::<Language>() else {
            tracing::warn!(id = %row.id, language = %row.language, "skipping sitemap row with unknown language");
            continue;
        };

        let base = base_id(&row.id);
        let item = grouped.entry(base.clone()).or_insert_with(|| SitemapItem {
            id: base,
            type_name: row.type_name.clone(),
            title: String::new(),
            path: String::new(),
            updated_at: None,
            paths: BTreeMap::new(),
            titles: BTreeMap::new(),
            exclude_from_sitemap: BTreeMap::new(),
        });

        item.paths.insert(language, row.path.clone());
        item.titles
            .insert(language, row.title.clone().unwrap_or_default());
        item.exclude_from_sitemap
            .insert(language, row.exclude_from_sitemap);
        if item.updated_at.is_none() {
            item.updated_at = row.updated_at.clone();
        }
    }

    grouped.into_values().collect()
}

/// Find the sitemap entry whose path for `language` matches `path`,
/// localized to that language.
pub fn find_route(items: &[SitemapItem], path: &str, language: Language) -> Option<SitemapItem> {
    items
        .iter()
        .find(|item| item.paths.get(&language).is_some_and(|p| p == path))
        .map(|item| {
            let mut localized = item.clone();
            localized.path = path.to_string();
            localized.title = item.titles.get(&language).cloned().unwrap_or_default();
            localized
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn row(id: &str, language: &str, path: &str, title: &str) -> SitemapRow {
        SitemapRow {
            id: id.to_string(),
            type_name: "page.content".to_string(),
            title: Some(title.to_string()),
            path: path.to_string(),
            language: language.to_string(),
            exclude_from_sitemap: false,
            updated_at: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn translations_group_into_one_item() {
        let items = group_sitemap(vec![
            row("page_about__i18n_en", "en", "/en/about", "About"),
            row("page_about__i18n_it", "it", "/it/chi-siamo", "Chi siamo"),
        ]);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, "page_about");
        assert_eq!(item.paths[&Language::English], "/en/about");
        assert_eq!(item.paths[&Language::Italian], "/it/chi-siamo");
        assert_eq!(item.titles[&Language::Italian], "Chi siamo");
    }

    #[test]
    fn drafts_group_with_their_original() {
        let items = group_sitemap(vec![
            row("page_about__i18n_en", "en", "/en/about", "About"),
            row("drafts.page_about__i18n_it", "it", "/it/chi-siamo", "Chi siamo"),
        ]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn unknown_language_rows_are_skipped() {
        let items = group_sitemap(vec![
            row("page_a__i18n_en", "en", "/en/a", "A"),
            row("page_a__i18n_de", "de", "/de/a", "A"),
        ]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].paths.len(), 1);
    }

    #[test]
    fn find_route_localizes_the_match() {
        let items = group_sitemap(vec![
            row("page_about__i18n_en", "en", "/en/about", "About"),
            row("page_about__i18n_it", "it", "/it/chi-siamo", "Chi siamo"),
        ]);

        let found = find_route(&items, "/it/chi-siamo", Language::Italian).unwrap();
        assert_eq!(found.path, "/it/chi-siamo");
        assert_eq!(found.title, "Chi siamo");

        // The same path does not match under a different language.
        assert!(find_route(&items, "/it/chi-siamo", Language::English).is_none());
    }

    #[test]
    fn not_found_item_covers_every_language() {
        let item = SitemapItem::not_found();
        assert_eq!(item.id, "page_notfound");
        for language in Language::ALL {
            assert_eq!(item.paths[&language], format!("/{language}"));
            assert!(item.exclude_from_sitemap[&language]);
        }
    }
}
