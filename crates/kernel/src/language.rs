//! The fixed set of content languages.
//!
//! Every content query is scoped to exactly one language; there is no
//! fallback language. Singleton documents (config, navigation, footer) are
//! stored per language under ids like `navigation__i18n_en`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// All supported languages, in path-prefix order.
    pub const ALL: [Self; 3] = [Self::English, Self::Italian, Self::Spanish];

    /// The language code used in document ids, paths, and queries.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Italian => "it",
            Self::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::English),
            "it" => Ok(Self::Italian),
            "es" => Ok(Self::Spanish),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_codes() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Language::Italian).unwrap();
        assert_eq!(json, "\"it\"");
        let parsed: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Language::Spanish);
    }
}
