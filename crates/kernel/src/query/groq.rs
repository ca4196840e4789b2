//! Typed GROQ composition primitives.
//!
//! Queries are assembled from `Groq` fragments rather than raw nested
//! string interpolation. Every data value that reaches a query goes
//! through [`quote`] (string literals) or [`validate_name`] (type names
//! and reference ids), so content values cannot alter the query shape.

use std::fmt;

use crate::error::{AppError, AppResult};

/// A GROQ fragment or complete query.
///
/// Fragments are safely nestable inside a parent query without altering
/// the parent's result shape; none of them performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groq(String);

impl Groq {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Groq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Groq> for String {
    fn from(groq: Groq) -> Self {
        groq.0
    }
}

/// Quote a value as a GROQ string literal, escaping quotes and
/// backslashes. Control characters other than whitespace escapes are
/// dropped.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Validate a caller-supplied name (content type, reference id) before it
/// is interpolated into a query. Names are limited to ASCII
/// alphanumerics, `.`, `_`, and `-`.
pub fn validate_name(kind: &str, value: &str) -> AppResult<()> {
    let ok = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if ok {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("invalid {kind} '{value}'")))
    }
}

/// Render a validated name list as a GROQ array literal, e.g.
/// `["page.blog","page.event"]`.
pub fn name_list(kind: &str, values: &[String]) -> AppResult<String> {
    let mut parts = Vec::with_capacity(values.len());
    for value in values {
        validate_name(kind, value)?;
        parts.push(quote(value));
    }
    Ok(format!("[{}]", parts.join(",")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn quote_drops_control_characters() {
        assert_eq!(quote("a\u{0}b"), "\"ab\"");
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn injection_attempt_stays_inside_literal() {
        // A value trying to close the literal and add a filter clause must
        // come out as inert string content.
        let quoted = quote(r#"en" || _type == "secret"#);
        assert_eq!(quoted, r#""en\" || _type == \"secret""#);
    }

    #[test]
    fn validate_name_accepts_type_names() {
        assert!(validate_name("type", "page.blog").is_ok());
        assert!(validate_name("tag", "tag_video-2024").is_ok());
    }

    #[test]
    fn validate_name_rejects_query_syntax() {
        assert!(validate_name("type", "page\" || true").is_err());
        assert!(validate_name("type", "").is_err());
        assert!(validate_name("type", "a b").is_err());
    }

    #[test]
    fn name_list_renders_array_literal() {
        let list = name_list("type", &["page.blog".to_string(), "page.event".to_string()]);
        assert_eq!(list.unwrap(), r#"["page.blog","page.event"]"#);
    }

    #[test]
    fn name_list_propagates_invalid_entries() {
        let err = name_list("tag", &["ok".to_string(), "bad tag".to_string()]);
        assert!(err.is_err());
    }
}
