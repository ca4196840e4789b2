//! Reusable query fragments for cross-cutting concerns.
//!
//! Each fragment is a pure function returning a [`Groq`] snippet that a
//! builder nests inside a larger projection. Reference resolution
//! failures degrade to null fields, never to query failures.

use crate::language::Language;
use crate::query::groq::Groq;

/// Projection applied to an image object: resolves the asset reference to
/// a URL plus intrinsic dimensions, and passes crop/hotspot through.
pub fn image() -> Groq {
    Groq::new(
        r#"{
  "src": asset->url,
  "width": asset->metadata.dimensions.width,
  "height": asset->metadata.dimensions.height,
  "alt": coalesce(alt, asset->altText),
  "caption": caption,
  crop,
  hotspot
}"#,
    )
}

/// The field set shared by button-like objects: a label plus an `href`
/// resolved across external / internal / dialog / file link variants.
///
/// A dangling internal reference makes every `select` branch miss, so the
/// href resolves to null rather than failing the parent query.
pub fn button_fields() -> Groq {
    Groq::new(
        r##"label,
  "href": select(
    defined(external) => external,
    defined(internal) => *[_id == ^.internal._ref][0].path,
    defined(dialog) => "#dialog-" + dialog.current,
    defined(file) => file.asset->url
  ),
  "target": select(defined(external) => "_blank", defined(file) => "_blank")"##,
    )
}

/// A standalone button projection.
pub fn button() -> Groq {
    Groq::new(format!("{{\n  {}\n}}", button_fields()))
}

/// A button projection with one nested level of child buttons, used for
/// navigation groups.
pub fn button_with_children() -> Groq {
    Groq::new(format!(
        "{{\n  {},\n  \"children\": children[] {}\n}}",
        button_fields(),
        button()
    ))
}

/// Flatten a portable-text field to plain text. Missing fields and blocks
/// of unknown shape degrade to the empty string.
pub fn rich_text(field: &str) -> Groq {
    Groq::new(format!("coalesce(pt::text({field}), \"\")"))
}

/// The site-wide sitemap lookup: one row per published page document and
/// language, keyed by document id. Draft documents are excluded outside
/// preview mode.
pub fn sitemap(preview: bool) -> Groq {
    Groq::new(format!(
        r#"*[_type match "page.*" && defined(path) && defined(language){drafts}] {{
  "id": _id,
  "type": _type,
  title,
  path,
  language,
  "excludeFromSitemap": coalesce(seo.excludeFromSitemap, false),
  "updatedAt": _updatedAt
}}"#,
        drafts = draft_filter(preview),
    ))
}

/// The draft-exclusion clause, emitted only outside preview mode. The
/// preview path sees drafts through its authenticated perspective.
pub fn draft_filter(preview: bool) -> &'static str {
    if preview {
        ""
    } else {
        " && !(_id in path(\"drafts.*\"))"
    }
}

/// The language scoping clause. Language codes come from the closed
/// [`Language`] enum, so interpolation is safe by construction.
pub fn language_filter(language: Language) -> String {
    format!(" && language == \"{language}\"")
}
