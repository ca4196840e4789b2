//! Utility-class safelist generation.
//!
//! Theme-driven class names never appear literally in source markup, so
//! the styling build step would purge them. The safelist is the cross
//! product of {utility prefixes per token category} × {normalized token
//! names} × {each breakpoint prefix plus the unprefixed base form}:
//! deterministic and total, every declared token produces entries.

use super::tokens::ThemeTokens;

/// Responsive breakpoint prefixes.
pub const BREAKPOINTS: [&str; 5] = ["sm", "md", "lg", "xl", "2xl"];

/// Utility prefixes applied to color tokens.
const COLOR_PREFIXES: [&str; 4] = ["bg", "text", "border", "divide"];

/// Generate the safelist for a set of tokens.
///
/// Entries are emitted base-form first, then one per breakpoint, and
/// deduplicated preserving first occurrence (font-family and font-weight
/// tokens share the `font-` prefix and may collide).
pub fn safelist(tokens: &ThemeTokens) -> Vec<String> {
    let mut base = Vec::new();

    for prefix in COLOR_PREFIXES {
        for name in tokens.colors.keys() {
            base.push(format!("{prefix}-{name}"));
        }
    }
    for name in tokens.font_family.keys() {
        base.push(format!("font-{name}"));
    }
    for name in tokens.font_weight.keys() {
        base.push(format!("font-{name}"));
    }
    for name in tokens.font_size.keys() {
        base.push(format!("text-{name}"));
    }

    let mut out = Vec::with_capacity(base.len() * (BREAKPOINTS.len() + 1));
    for class in &base {
        out.push(class.clone());
        for breakpoint in BREAKPOINTS {
            out.push(format!("{breakpoint}:{class}"));
        }
    }

    dedup_preserving_order(out)
}

fn dedup_preserving_order(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
