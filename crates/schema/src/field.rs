//! Field definitions.
//!
//! Fields are declarative: the studio editor consumes them as JSON; the
//! runtime query path never reads them.

use serde::Serialize;
use serde_json::Value;

/// The editable kind of a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Text,
    Slug,
    Boolean,
    Number,
    Date,
    PortableText,
    Image,
    Reference {
        /// Document types this reference may point at.
        to: Vec<String>,
    },
    Array {
        /// Member types allowed in the array.
        of: Vec<String>,
    },
    Object {
        fields: Vec<FieldDef>,
    },
}

/// A validation rule attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    Required,
    Min { value: f64 },
    Max { value: f64 },
    /// Lowercase letters, digits, and hyphens only.
    SlugFormat,
}

/// Conditional visibility: the field is hidden unless the condition
/// holds for the current document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "when", rename_all = "camelCase")]
pub enum Condition {
    /// Visible only while `field` has a value.
    Defined { field: String },
    /// Visible only while `field` has no value.
    NotDefined { field: String },
    /// Visible only while `field` equals `value`.
    Equals { field: String, value: Value },
}

/// A single editable field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Conditional visibility; None means always visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_unless: Option<Condition>,
}

impl FieldDef {
    pub fn new(name: &str, title: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            kind,
            validation: Vec::new(),
            description: None,
            hidden_unless: None,
        }
    }

    pub fn string(name: &str, title: &str) -> Self {
        Self::new(name, title, FieldKind::String)
    }

    pub fn slug(name: &str, title: &str) -> Self {
        Self::new(name, title, FieldKind::Slug).rule(Rule::SlugFormat)
    }

    pub fn portable_text(name: &str, title: &str) -> Self {
        Self::new(name, title, FieldKind::PortableText)
    }

    pub fn image(name: &str, title: &str) -> Self {
        Self::new(name, title, FieldKind::Image)
    }

    pub fn reference(name: &str, title: &str, to: &[&str]) -> Self {
        Self::new(
            name,
            title,
            FieldKind::Reference {
                to: to.iter().map(|t| (*t).to_string()).collect(),
            },
        )
    }

    pub fn array(name: &str, title: &str, of: &[&str]) -> Self {
        Self::new(
            name,
            title,
            FieldKind::Array {
                of: of.iter().map(|t| (*t).to_string()).collect(),
            },
        )
    }

    pub fn object(name: &str, title: &str, fields: Vec<FieldDef>) -> Self {
        Self::new(name, title, FieldKind::Object { fields })
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.validation.push(rule);
        self
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn hidden_unless(mut self, condition: Condition) -> Self {
        self.hidden_unless = Some(condition);
        self
    }

    pub fn is_required(&self) -> bool {
        self.validation.contains(&Rule::Required)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn field_serializes_with_flattened_kind() {
        let field = FieldDef::string("title", "Title").required();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["name"], "title");
        assert_eq!(json["type"], "string");
        assert_eq!(json["validation"][0]["rule"], "required");
    }

    #[test]
    fn slug_fields_carry_format_rule() {
        let field = FieldDef::slug("slug", "Identifier").required();
        assert!(field.validation.contains(&Rule::SlugFormat));
        assert!(field.is_required());
    }

    #[test]
    fn reference_lists_target_types() {
        let field = FieldDef::reference("parent", "Parent", &["page.blogs"]);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["to"][0], "page.blogs");
    }

    #[test]
    fn conditional_visibility_serializes() {
        let field = FieldDef::string("html", "HTML").hidden_unless(Condition::NotDefined {
            field: "image".to_string(),
        });
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["hiddenUnless"]["when"], "notDefined");
        assert_eq!(json["hiddenUnless"]["field"], "image");
    }

    #[test]
    fn optional_parts_are_omitted() {
        let field = FieldDef::string("plain", "Plain");
        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("validation").is_none());
        assert!(json.get("description").is_none());
        assert!(json.get("hiddenUnless").is_none());
    }
}
