//! Per-block conditional fragments.
//!
//! Each block type contributes a `_type == "..." => { ... }` arm that the
//! page builder splices into the `blocks[]` projection. Arms only expand
//! the matching variant, so unknown block types pass through with just
//! their `_key` and `_type`.

use crate::language::Language;
use crate::query::fragments::{button, draft_filter, image, language_filter, rich_text};
use crate::query::groq::Groq;

/// Basic hero: eyebrow, title, text, image, and action buttons.
pub fn hero_basic() -> Groq {
    Groq::new(format!(
        r#"_type == "hero.basic" => {{
  eyebrow,
  title,
  "text": {text},
  "image": image {image},
  "buttons": buttons[] {button}
}}"#,
        text = rich_text("text"),
        image = image(),
        button = button(),
    ))
}

/// Text + media split block.
pub fn text_media() -> Groq {
    Groq::new(format!(
        r#"_type == "block.textmedia" => {{
  title,
  "intro": {intro},
  "body": {body},
  "image": image {image},
  "buttons": buttons[] {button}
}}"#,
        intro = rich_text("intro"),
        body = rich_text("body"),
        image = image(),
        button = button(),
    ))
}

/// Grid of cards, each with its own image, text, and buttons.
pub fn card_grid() -> Groq {
    Groq::new(format!(
        r#"_type == "block.cardgrid" => {{
  title,
  "intro": {intro},
  "items": items[] {{
    _key,
    title,
    "text": {text},
    "image": image {image},
    "buttons": buttons[] {button}
  }}
}}"#,
        intro = rich_text("intro"),
        text = rich_text("text"),
        image = image(),
        button = button(),
    ))
}

/// Article body block with tags, authors, and a short list of related
/// articles of the same page type.
pub fn article(language: Language, preview: bool) -> Groq {
    Groq::new(format!(
        r#"_type == "block.article" => {{
  "image": image {image},
  "body": {body},
  "tags": tags[]->title,
  "authors": authors[]-> {{
    name,
    "image": image {image}
  }},
  publishedAt,
  "related": *[_type == ^.^._type && _id != ^.^._id{drafts}{language}] {{
    "id": _id,
    title,
    "href": path,
    "image": image {image}
  }} | order(publishedAt desc, _createdAt desc) [0...3]
}}"#,
        image = image(),
        body = rich_text("body"),
        drafts = draft_filter(preview),
        language = language_filter(language),
    ))
}

/// Rich text block flattened to plain text.
pub fn rich_text_block() -> Groq {
    Groq::new(format!(
        r#"_type == "block.richtext" => {{
  "content": {content}
}}"#,
        content = rich_text("content"),
    ))
}

/// Curated resource list driven by the block's own `filter` field.
///
/// The in-page arm reads the type/tag allow-lists from the document via
/// parent references; the standalone builder in
/// [`crate::query::builders::curated_list_query`] generates the same
/// projection from caller-supplied filters.
pub fn resource_list(language: Language, preview: bool) -> Groq {
    Groq::new(format!(
        r#"_type == "block.resourcelist" => {{
  title,
  "intro": {intro},
  "items": *[
    (
      (
        _type in ^.filter.types
        && defined(^.filter.types)
        && count(^.filter.types) > 0
      )
      ||
      (
        _type in {default_types}
        && (
          !defined(^.filter.types)
          || count(^.filter.types) == 0
        )
      )
    )
    && (
      !defined(^.filter.tags)
      || count(^.filter.tags) == 0
      || count(tags[@._ref in ^.^.filter.tags[]._ref]) > 0
    ){drafts}{language}
  ] {projection} | order(publishedAt desc, _createdAt desc)
}}"#,
        intro = rich_text("intro"),
        default_types = super::builders::default_taggable_types_literal(),
        drafts = draft_filter(preview),
        language = language_filter(language),
        projection = list_item_projection(),
    ))
}

/// The projection shared by every list-producing query: display fields
/// plus a `date` computed as publish date falling back to creation date.
pub fn list_item_projection() -> Groq {
    Groq::new(format!(
        r#"{{
  "id": _id,
  "type": _type,
  title,
  "href": path,
  "image": select(
    defined(image) => image {image},
    defined(blocks[0].image) => blocks[0].image {image}
  ),
  "intro": {intro},
  "tags": tags[]->title,
  "authors": authors[]-> {{
    name,
    "image": image {image}
  }},
  publishedAt,
  "createdAt": _createdAt,
  "date": coalesce(publishedAt, _createdAt)
}}"#,
        image = image(),
        intro = rich_text("blocks[0].intro"),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn every_block_arm_is_conditional() {
        for (name, arm) in [
            ("hero.basic", hero_basic()),
            ("block.textmedia", text_media()),
            ("block.cardgrid", card_grid()),
            ("block.article", article(Language::English, false)),
            ("block.richtext", rich_text_block()),
            ("block.resourcelist", resource_list(Language::English, false)),
        ] {
            assert!(
                arm.as_str().starts_with(&format!("_type == \"{name}\" =>")),
                "arm for {name} must be conditional on its type"
            );
        }
    }

    #[test]
    fn resource_list_reads_filter_from_parent() {
        let arm = resource_list(Language::English, false);
        assert!(arm.as_str().contains("^.filter.types"));
        assert!(arm.as_str().contains("^.^.filter.tags[]._ref"));
    }

    #[test]
    fn resource_list_orders_by_publish_then_created() {
        let arm = resource_list(Language::English, false);
        assert!(
            arm.as_str()
                .contains("order(publishedAt desc, _createdAt desc)")
        );
    }

    #[test]
    fn list_projection_coalesces_date() {
        let projection = list_item_projection();
        assert!(
            projection
                .as_str()
                .contains("\"date\": coalesce(publishedAt, _createdAt)")
        );
    }

    #[test]
    fn article_related_scoped_to_language() {
        let arm = article(Language::Spanish, false);
        assert!(arm.as_str().contains("language == \"es\""));
        assert!(arm.as_str().contains("[0...3]"));
    }
}
