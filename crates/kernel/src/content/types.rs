//! Transfer shapes decoded from query results.
//!
//! Every fetch produces a fresh immutable snapshot; nothing here is
//! mutated in place after decode. Singleton documents decode with all
//! fields optional, since a missing document resolves to empty content
//! rather than an error.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A resolved display image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub src: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

/// A resolved button or link.
///
/// `href` is absent when the underlying reference was unresolved or
/// pointed at a deleted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Button {
    pub label: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
}

/// A navigation entry: a button with one nested level of children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationItem {
    pub label: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
    pub children: Vec<Button>,
}

/// Language-scoped navigation singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationTree {
    pub title: Option<String>,
    pub items: Vec<NavigationItem>,
    pub buttons: Vec<Button>,
}

/// A footer link group, optionally nested one level (group → items).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterGroup {
    pub title: Option<String>,
    pub href: Option<String>,
    pub items: Vec<Button>,
}

/// A social link with an icon identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub icon: Option<String>,
    pub label: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
}

/// Language-scoped footer singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub copyright: Option<String>,
    pub legal: Option<String>,
    pub links: Vec<FooterGroup>,
    pub legal_links: Vec<Button>,
    pub socials: Vec<SocialLink>,
}

/// SEO fields attached to pages and the site config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Image>,
}

/// Language-scoped site config singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub seo: Option<Seo>,
}

/// An author with a display image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: Option<String>,
    pub image: Option<Image>,
}

/// A curated-list result row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub title: Option<String>,
    pub href: Option<String>,
    pub image: Option<Image>,
    pub intro: Option<String>,
    pub tags: Option<Vec<String>>,
    pub authors: Option<Vec<Author>>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
    /// Publish date falling back to creation date, as computed by the
    /// query.
    pub date: Option<String>,
}

/// Parse a backend timestamp: full RFC 3339, or a bare date taken as
/// midnight UTC (scheduled documents often carry date-only publish
/// dates).
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|ndt| Utc.from_utc_datetime(&ndt))
        })
}

/// Sort list items by publish date descending, falling back to creation
/// date descending when publish date is absent. Items without a publish
/// date sort after published ones, mirroring
/// `order(publishedAt desc, _createdAt desc)`.
pub fn sort_list_items(items: &mut [ListItem]) {
    fn created(item: &ListItem) -> Option<DateTime<Utc>> {
        item.created_at.as_deref().and_then(parse_timestamp)
    }

    items.sort_by(|a, b| {
        let a_published = a.published_at.as_deref().and_then(parse_timestamp);
        let b_published = b.published_at.as_deref().and_then(parse_timestamp);
        match (a_published, b_published) {
            (Some(x), Some(y)) => y.cmp(&x).then_with(|| cmp_desc(created(a), created(b))),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => cmp_desc(created(a), created(b)),
        }
    });
}

/// Descending comparison with absent values last.
fn cmp_desc(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
