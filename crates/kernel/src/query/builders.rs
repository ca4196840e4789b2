//! Per-content-type query builders.
//!
//! Each builder produces one complete GROQ query parameterized by
//! language and preview mode. Singleton documents (config, navigation,
//! footer) are stored per language under `<name>__i18n_<lang>` ids; a
//! missing singleton resolves to null, which consumers decode as empty
//! content rather than an error.

use crate::error::AppResult;
use crate::language::Language;
use crate::query::blocks;
use crate::query::fragments::{
    button, button_with_children, draft_filter, image, language_filter, sitemap,
};
use crate::query::groq::{Groq, name_list};

/// Content types included in a curated list when no explicit type
/// allow-list is given.
pub const DEFAULT_TAGGABLE_TYPES: [&str; 4] =
    ["page.blog", "page.event", "page.casestudy", "page.media"];

/// The default taggable type set as a GROQ array literal.
pub(crate) fn default_taggable_types_literal() -> String {
    let quoted: Vec<String> = DEFAULT_TAGGABLE_TYPES
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect();
    format!("[{}]", quoted.join(","))
}

/// Filter criteria for a curated list.
///
/// An empty list and an absent filter are equivalent: no `types` means
/// the default taggable set, no `tags` means no tag constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Explicit content-type allow-list, e.g. `["page.blog"]`.
    pub types: Vec<String>,
    /// Tag reference ids; a result must share at least one.
    pub tags: Vec<String>,
}

/// Site config singleton for a language.
pub fn config_query(language: Language) -> Groq {
    Groq::new(format!(
        r#"*[_id == "config__i18n_{language}"][0] {{
  "id": _id,
  name,
  domain,
  "seo": seo {{
    title,
    description,
    "image": image {image}
  }}
}}"#,
        image = image(),
    ))
}

/// Navigation singleton for a language: menu items with one nested level
/// of children, plus standalone action buttons.
pub fn navigation_query(language: Language) -> Groq {
    Groq::new(format!(
        r#"*[_id == "navigation__i18n_{language}"][0] {{
  title,
  "items": items[] {items},
  "buttons": buttons[] {buttons}
}}"#,
        items = button_with_children(),
        buttons = button(),
    ))
}

/// Footer singleton for a language: copyright and legal text, grouped
/// link lists, legal links, and social links.
pub fn footer_query(language: Language) -> Groq {
    Groq::new(format!(
        r#"*[_id == "footer__i18n_{language}"][0] {{
  copyright,
  legal,
  "links": links[] {{
    title,
    "href": link {button}.href,
    "items": items[] {button}
  }},
  "legalLinks": legalLinks[] {button},
  "socials": socials[] {{
    icon,
    {button_fields}
  }}
}}"#,
        button = button(),
        button_fields = crate::query::fragments::button_fields(),
    ))
}

/// The page document for a route, selected by the `$path` parameter.
///
/// Blocks decode through per-type conditional arms; a block of unknown
/// type keeps only its `_key` and `_type`.
pub fn page_query(language: Language, preview: bool) -> Groq {
    Groq::new(format!(
        r#"*[_type match "page.*" && path == $path{language}{drafts}][0] {{
  "id": _id,
  "type": _type,
  title,
  path,
  "hero": hero {{
    _key,
    _type,
    {hero_basic}
  }},
  "blocks": blocks[] {{
    _key,
    _type,
    {text_media},
    {card_grid},
    {resource_list},
    {article},
    {rich_text}
  }},
  "seo": seo {{
    title,
    description,
    "image": image {image}
  }}
}}"#,
        language = language_filter(language),
        drafts = draft_filter(preview),
        hero_basic = blocks::hero_basic(),
        text_media = blocks::text_media(),
        card_grid = blocks::card_grid(),
        resource_list = blocks::resource_list(language, preview),
        article = blocks::article(language, preview),
        rich_text = blocks::rich_text_block(),
        image = image(),
    ))
}

/// Standalone curated-list query built from caller-supplied filters.
///
/// A candidate qualifies iff its type is in the explicit allow-list when
/// one is given, or in [`DEFAULT_TAGGABLE_TYPES`] otherwise; shares at
/// least one tag with a non-empty tag allow-list; is not a draft outside
/// preview mode; and matches the requested language exactly.
pub fn curated_list_query(
    language: Language,
    preview: bool,
    filter: &ListFilter,
) -> AppResult<Groq> {
    let types_literal = if filter.types.is_empty() {
        default_taggable_types_literal()
    } else {
        name_list("content type", &filter.types)?
    };

    let tag_clause = if filter.tags.is_empty() {
        String::new()
    } else {
        format!(
            "\n  && count(tags[@._ref in {}]) > 0",
            name_list("tag", &filter.tags)?
        )
    };

    Ok(Groq::new(format!(
        r#"*[
  _type in {types_literal}{tag_clause}{drafts}{language}
] {projection} | order(publishedAt desc, _createdAt desc)"#,
        drafts = draft_filter(preview),
        language = language_filter(language),
        projection = blocks::list_item_projection(),
    )))
}

/// Standalone sitemap query for route resolution.
pub fn sitemap_query(preview: bool) -> Groq {
    sitemap(preview)
}

/// The theme document consumed by the build-time theme generator.
pub fn theme_query() -> Groq {
    Groq::new(
        r#"*[_id == "config_theme"][0] {
  colors[] { name, value },
  fontFamily[] { name, value },
  fontSize[] { name, size, lineHeight, letterSpacing, fontWeight },
  fontWeight[] { name, value },
  "stylesheets": stylesheets[].value
}"#,
    )
}
