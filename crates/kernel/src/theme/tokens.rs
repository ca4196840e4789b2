//! Design-token formatting.
//!
//! Transforms the raw theme document into normalized token maps. Token
//! names are lowercased with spaces replaced by hyphens; the
//! transformation is deterministic and total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw name/value token as stored in the theme document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedValue {
    pub name: String,
    pub value: Value,
}

/// A raw font-size token with optional overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizeToken {
    pub name: String,
    pub size: String,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
    pub font_weight: Option<String>,
}

/// The raw theme document as returned by the theme query. Sections the
/// document does not define come back as explicit nulls, so every field
/// tolerates null as well as absence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeDocument {
    #[serde(deserialize_with = "null_as_empty")]
    pub colors: Vec<NamedValue>,
    #[serde(deserialize_with = "null_as_empty")]
    pub font_family: Vec<NamedValue>,
    #[serde(deserialize_with = "null_as_empty")]
    pub font_size: Vec<FontSizeToken>,
    #[serde(deserialize_with = "null_as_empty")]
    pub font_weight: Vec<NamedValue>,
    #[serde(deserialize_with = "null_as_empty")]
    pub stylesheets: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A formatted font size: a bare size string when no override is set, or
/// a `[size, {overrides}]` pair containing exactly the overrides that
/// were set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FontSize {
    Plain(String),
    WithOptions(String, FontSizeOptions),
}

/// Overrides attached to a font-size token.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

/// Normalized design tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub colors: BTreeMap<String, String>,
    pub font_family: BTreeMap<String, Vec<String>>,
    pub font_size: BTreeMap<String, FontSize>,
    pub font_weight: BTreeMap<String, u32>,
}

/// Normalize a token name to a lowercase hyphenated identifier.
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// Format color tokens into a name → value map.
pub fn format_colors(colors: &[NamedValue]) -> BTreeMap<String, String> {
    colors
        .iter()
        .filter(|c| !c.name.is_empty())
        .map(|c| (normalize_name(&c.name), value_as_string(&c.value)))
        .collect()
}

/// Format font-family tokens into a name → family-list map, stripping
/// quotes and trimming each family.
pub fn format_font_family(fonts: &[NamedValue]) -> BTreeMap<String, Vec<String>> {
    fonts
        .iter()
        .filter(|f| !f.name.is_empty())
        .map(|f| {
            let families = value_as_string(&f.value)
                .replace(['"', '\''], "")
                .split(',')
                .map(|family| family.trim().to_string())
                .filter(|family| !family.is_empty())
                .collect();
            (normalize_name(&f.name), families)
        })
        .collect()
}

/// Format font-weight tokens into a name → numeric-weight map. Tokens
/// whose value does not parse as a number are skipped with a warning.
pub fn format_font_weight(weights: &[NamedValue]) -> BTreeMap<String, u32> {
    let mut out = BTreeMap::new();
    for weight in weights.iter().filter(|w| !w.name.is_empty()) {
        let raw = value_as_string(&weight.value);
        let cleaned = raw.replace(['"', '\''], "");
        match cleaned.trim().parse::<u32>() {
            Ok(value) => {
                out.insert(normalize_name(&weight.name), value);
            }
            Err(_) => {
                tracing::warn!(name = %weight.name, value = %raw, "skipping non-numeric font weight");
            }
        }
    }
    out
}

/// Format font-size tokens, keeping the conditional shape: a bare size
/// when no override is set, a `[size, options]` pair otherwise.
pub fn format_font_size(sizes: &[FontSizeToken]) -> BTreeMap<String, FontSize> {
    sizes
        .iter()
        .filter(|s| !s.name.is_empty())
        .map(|token| {
            let name = normalize_name(&token.name);
            let has_overrides = token.line_height.is_some()
                || token.letter_spacing.is_some()
                || token.font_weight.is_some();
            let size = if has_overrides {
                FontSize::WithOptions(
                    token.size.clone(),
                    FontSizeOptions {
                        line_height: token.line_height.clone(),
                        letter_spacing: token.letter_spacing.clone(),
                        font_weight: token.font_weight.clone(),
                    },
                )
            } else {
                FontSize::Plain(token.size.clone())
            };
            (name, size)
        })
        .collect()
}

fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: &str, value: Value) -> NamedValue {
        NamedValue {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn names_normalize_to_lowercase_hyphenated() {
        assert_eq!(normalize_name("Brand Primary"), "brand-primary");
        assert_eq!(normalize_name("lg"), "lg");
    }

    #[test]
    fn colors_map_normalized_names_to_values() {
        let colors = format_colors(&[
            named("Brand Primary", json!("#ff4400")),
            named("White", json!("#ffffff")),
        ]);
        assert_eq!(colors["brand-primary"], "#ff4400");
        assert_eq!(colors["white"], "#ffffff");
    }

    #[test]
    fn font_families_split_and_strip_quotes() {
        let fonts = format_font_family(&[named("Sans", json!("\"Inter\", 'Helvetica Neue', sans-serif"))]);
        assert_eq!(
            fonts["sans"],
            vec!["Inter", "Helvetica Neue", "sans-serif"]
        );
    }

    #[test]
    fn font_weights_parse_strings_and_numbers() {
        let weights = format_font_weight(&[
            named("Bold", json!("700")),
            named("Regular", json!(400)),
            named("Broken", json!("heavy")),
        ]);
        assert_eq!(weights["bold"], 700);
        assert_eq!(weights["regular"], 400);
        assert!(!weights.contains_key("broken"));
    }

    #[test]
    fn font_size_without_overrides_is_plain() {
        let sizes = format_font_size(&[FontSizeToken {
            name: "lg".to_string(),
            size: "1.125rem".to_string(),
            ..FontSizeToken::default()
        }]);
        assert_eq!(sizes["lg"], FontSize::Plain("1.125rem".to_string()));
        assert_eq!(
            serde_json::to_value(&sizes["lg"]).unwrap(),
            json!("1.125rem")
        );
    }

    #[test]
    fn font_size_with_overrides_serializes_as_pair() {
        let sizes = format_font_size(&[FontSizeToken {
            name: "lg".to_string(),
            size: "1.125rem".to_string(),
            line_height: Some("1.75rem".to_string()),
            ..FontSizeToken::default()
        }]);
        assert_eq!(
            serde_json::to_value(&sizes["lg"]).unwrap(),
            json!(["1.125rem", { "lineHeight": "1.75rem" }])
        );
    }

    #[test]
    fn font_size_options_include_only_set_keys() {
        let sizes = format_font_size(&[FontSizeToken {
            name: "display".to_string(),
            size: "4rem".to_string(),
            letter_spacing: Some("-0.02em".to_string()),
            font_weight: Some("600".to_string()),
            ..FontSizeToken::default()
        }]);
        let json = serde_json::to_value(&sizes["display"]).unwrap();
        assert_eq!(
            json,
            json!(["4rem", { "letterSpacing": "-0.02em", "fontWeight": "600" }])
        );
    }

    #[test]
    fn unnamed_tokens_are_ignored() {
        let colors = format_colors(&[named("", json!("#000000"))]);
        assert!(colors.is_empty());
    }

    #[test]
    fn theme_document_decodes_with_missing_sections() {
        let doc: ThemeDocument = serde_json::from_value(json!({
            "colors": [{ "name": "Black", "value": "#000" }]
        }))
        .unwrap();
        assert_eq!(doc.colors.len(), 1);
        assert!(doc.font_size.is_empty());
        assert!(doc.stylesheets.is_empty());
    }

    #[test]
    fn theme_document_tolerates_null_sections() {
        let doc: ThemeDocument = serde_json::from_value(json!({
            "colors": null,
            "fontFamily": null,
            "fontSize": null,
            "fontWeight": null,
            "stylesheets": null
        }))
        .unwrap();
        assert!(doc.colors.is_empty());
        assert!(doc.stylesheets.is_empty());
    }
}
