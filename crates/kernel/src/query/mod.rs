//! GROQ query composition.
//!
//! This module provides:
//! - `groq`: the typed fragment type plus quoting/validation helpers
//! - `fragments`: reusable snippets (image, button, rich text, sitemap)
//! - `blocks`: per-block conditional arms for the page projection
//! - `builders`: complete per-content-type queries

pub mod blocks;
pub mod builders;
pub mod fragments;
pub mod groq;

pub use builders::{
    DEFAULT_TAGGABLE_TYPES, ListFilter, config_query, curated_list_query, footer_query,
    navigation_query, page_query, sitemap_query, theme_query,
};
pub use groq::Groq;
