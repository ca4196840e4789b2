//! Document and object schemas.

use serde::Serialize;
use serde_json::Value;

use crate::field::FieldDef;

/// Sort direction for a default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Asc,
    Desc,
}

/// A default ordering offered in the studio document list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ordering {
    pub title: String,
    pub by: Vec<(String, Direction)>,
}

impl Ordering {
    /// Newest published first, the standard ordering for dated content.
    pub fn published_desc() -> Self {
        Self {
            title: "Publish date (newest first)".to_string(),
            by: vec![("publishedAt".to_string(), Direction::Desc)],
        }
    }
}

/// How a document row is summarized in the studio list.
///
/// `select` maps preparation inputs to document paths. Inputs named in
/// `flatten_rich_text` are portable-text arrays whose plain text becomes
/// the value, via [`blocks_to_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreviewConfig {
    pub select: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flatten_rich_text: Vec<String>,
}

impl PreviewConfig {
    /// Title straight from a document path.
    pub fn title_from(path: &str) -> Self {
        Self {
            select: vec![("title".to_string(), path.to_string())],
            title: Some("title".to_string()),
            ..Self::default()
        }
    }

    /// Title flattened out of a portable-text field.
    pub fn rich_text_title(path: &str) -> Self {
        Self {
            select: vec![("content".to_string(), path.to_string())],
            title: Some("content".to_string()),
            flatten_rich_text: vec!["content".to_string()],
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, name: &str, path: &str) -> Self {
        self.select.push((name.to_string(), path.to_string()));
        self.subtitle = Some(name.to_string());
        self
    }
}

/// A seeded initial value for a new document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InitialValue {
    /// A literal value.
    Literal { field: String, value: Value },
    /// A reference to a fixed document, used to pre-fill the parent of
    /// new blog and media pages.
    ParentReference { field: String, document_id: String },
}

/// Whether a schema describes a standalone document or a nested object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    Document,
    Object,
}

/// A complete content type definition for the studio editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSchema {
    pub name: String,
    pub title: String,
    pub kind: SchemaKind,
    pub fields: Vec<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orderings: Vec<Ordering>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_values: Vec<InitialValue>,
}

impl DocumentSchema {
    pub fn document(name: &str, title: &str, fields: Vec<FieldDef>) -> Self {
        Self::new(name, title, SchemaKind::Document, fields)
    }

    pub fn object(name: &str, title: &str, fields: Vec<FieldDef>) -> Self {
        Self::new(name, title, SchemaKind::Object, fields)
    }

    fn new(name: &str, title: &str, kind: SchemaKind, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            kind,
            fields,
            preview: None,
            orderings: Vec::new(),
            initial_values: Vec::new(),
        }
    }

    pub fn preview(mut self, preview: PreviewConfig) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.orderings.push(ordering);
        self
    }

    pub fn initial_value(mut self, value: InitialValue) -> Self {
        self.initial_values.push(value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Flatten a portable-text array to plain text for preview titles.
///
/// Text blocks contribute their children's `text` spans joined in order;
/// paragraphs are joined with spaces. Anything malformed degrades to
/// empty rather than failing the preview.
pub fn blocks_to_text(blocks: &Value) -> String {
    let Some(blocks) = blocks.as_array() else {
        return String::new();
    };

    let paragraphs: Vec<String> = blocks
        .iter()
        .filter(|block| block.get("_type").and_then(Value::as_str) == Some("block"))
        .map(|block| {
            block
                .get("children")
                .and_then(Value::as_array)
                .map(|children| {
                    children
                        .iter()
                        .filter_map(|child| child.get("text").and_then(Value::as_str))
                        .collect::<Vec<_>>()
                        .concat()
                })
                .unwrap_or_default()
        })
        .filter(|text| !text.is_empty())
        .collect();

    paragraphs.join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blocks_to_text_joins_spans_and_paragraphs() {
        let blocks = json!([
            {
                "_type": "block",
                "children": [
                    {"_type": "span", "text": "Hello "},
                    {"_type": "span", "text": "world"}
                ]
            },
            {
                "_type": "block",
                "children": [{"_type": "span", "text": "Second paragraph"}]
            }
        ]);
        assert_eq!(blocks_to_text(&blocks), "Hello world Second paragraph");
    }

    #[test]
    fn blocks_to_text_skips_non_text_blocks() {
        let blocks = json!([
            {"_type": "image", "asset": {"_ref": "image-abc"}},
            {"_type": "block", "children": [{"text": "Caption"}]}
        ]);
        assert_eq!(blocks_to_text(&blocks), "Caption");
    }

    #[test]
    fn blocks_to_text_degrades_to_empty() {
        assert_eq!(blocks_to_text(&json!(null)), "");
        assert_eq!(blocks_to_text(&json!("not an array")), "");
        assert_eq!(blocks_to_text(&json!([{"_type": "block"}])), "");
    }

    #[test]
    fn document_builder_collects_parts() {
        let schema = DocumentSchema::document("page.blog", "Blog", Vec::new())
            .ordering(Ordering::published_desc())
            .initial_value(InitialValue::ParentReference {
                field: "parent".to_string(),
                document_id: "page_blogs".to_string(),
            });
        assert_eq!(schema.orderings.len(), 1);
        assert_eq!(schema.orderings[0].by[0].1, Direction::Desc);
        assert_eq!(schema.initial_values.len(), 1);
    }

    #[test]
    fn preview_with_subtitle_selects_both_paths() {
        let preview = PreviewConfig::title_from("title").with_subtitle("author", "author.name");
        assert_eq!(preview.select.len(), 2);
        assert_eq!(preview.subtitle.as_deref(), Some("author"));
    }
}
