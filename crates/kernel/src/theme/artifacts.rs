//! Generated theme artifacts.
//!
//! The build writes two files: a theme config (tokens + safelist +
//! stylesheet text) re-imported by the styling build step, and the raw
//! stylesheet served statically. Both are treated as immutable for the
//! lifetime of a deployed build.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Theme;

/// Header placed at the top of the generated stylesheet.
pub const STYLESHEET_HEADER: &str = "/* This file is automatically generated. */";

/// Concatenate raw stylesheet chunks under the generated-file header.
pub fn render_stylesheet(chunks: &[String]) -> String {
    let mut out = String::from(STYLESHEET_HEADER);
    out.push_str("\n\n");
    out.push_str(&chunks.join("\n\n"));
    out.push('\n');
    out
}

/// Write the theme config JSON and stylesheet to their fixed output
/// paths, creating parent directories as needed.
pub fn write_theme_artifacts(theme: &Theme, config_path: &Path, styles_path: &Path) -> Result<()> {
    let config_json =
        serde_json::to_string_pretty(theme).context("serialize theme config")?;

    for path in [config_path, styles_path] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }

    fs::write(config_path, config_json)
        .with_context(|| format!("write theme config {}", config_path.display()))?;
    fs::write(styles_path, &theme.stylesheets)
        .with_context(|| format!("write stylesheet {}", styles_path.display()))?;

    Ok(())
}
