//! Build-time theme generation.
//!
//! Transforms the remote theme document into design tokens, a purge
//! safelist, and concatenated stylesheet text, then writes the generated
//! artifacts. Runs once per build, not per request.

mod artifacts;
mod safelist;
mod tokens;

use serde::Serialize;

use crate::client::{ContentFetch, Params};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::query::theme_query;

pub use artifacts::{STYLESHEET_HEADER, render_stylesheet, write_theme_artifacts};
pub use safelist::{BREAKPOINTS, safelist};
pub use tokens::{
    FontSize, FontSizeOptions, FontSizeToken, NamedValue, ThemeDocument, ThemeTokens,
    format_colors, format_font_family, format_font_size, format_font_weight, normalize_name,
};

/// The complete generated theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub theme: ThemeTokens,
    pub safelist: Vec<String>,
    pub stylesheets: String,
}

/// Pure transformation from raw theme document to generated theme.
pub fn build_theme(document: &ThemeDocument) -> Theme {
    let tokens = ThemeTokens {
        colors: format_colors(&document.colors),
        font_family: format_font_family(&document.font_family),
        font_size: format_font_size(&document.font_size),
        font_weight: format_font_weight(&document.font_weight),
    };
    let safelist = safelist::safelist(&tokens);
    let stylesheets = render_stylesheet(&document.stylesheets);

    Theme {
        theme: tokens,
        safelist,
        stylesheets,
    }
}

/// Fetch the published theme document, build the theme, and write the
/// generated artifacts to the configured output paths.
pub async fn generate(fetcher: &dyn ContentFetch, config: &Config) -> AppResult<Theme> {
    let value = fetcher.fetch(&theme_query(), &Params::new(), false).await?;
    let document: ThemeDocument = if value.is_null() {
        tracing::warn!("no theme document published, generating empty theme");
        ThemeDocument::default()
    } else {
        serde_json::from_value(value).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("failed to decode theme document: {e}"))
        })?
    };

    let theme = build_theme(&document);
    write_theme_artifacts(&theme, &config.theme_config_path, &config.theme_styles_path)
        .map_err(AppError::Internal)?;

    tracing::info!(
        colors = theme.theme.colors.len(),
        font_sizes = theme.theme.font_size.len(),
        safelist = theme.safelist.len(),
        config = %config.theme_config_path.display(),
        "theme artifacts generated"
    );
    Ok(theme)
}
