//! Display languages supported by the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A catalog display language.
///
/// French is the reference language: every record carries a French
/// translation and it is the only fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Wo,
}

impl Language {
    /// All supported languages, French first.
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Wo];

    /// The two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Wo => "wo",
        }
    }

    /// English name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Fr => "French",
            Language::En => "English",
            Language::Wo => "Wolof",
        }
    }

    /// Parse a language code, ignoring case and any region suffix
    /// (`"EN"`, `"en-US"` and `"fr_SN"` are all accepted).
    ///
    /// Returns `None` for codes outside the supported set.
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            "wo" => Some(Language::Wo),
            _ => None,
        }
    }

    /// Parse a language code, falling back to French when it is missing or
    /// unsupported.
    pub fn parse_or_default(code: Option<&str>) -> Self {
        code.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported language '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Language::parse("fr"), Some(Language::Fr));
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("wo"), Some(Language::Wo));
        assert_eq!(Language::parse("en-US"), Some(Language::En));
        assert_eq!(Language::parse(" fr_SN "), Some(Language::Fr));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
        assert!("es".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_french() {
        assert_eq!(Language::default(), Language::Fr);
        assert_eq!(Language::parse_or_default(None), Language::Fr);
        assert_eq!(Language::parse_or_default(Some("xx")), Language::Fr);
        assert_eq!(Language::parse_or_default(Some("wo")), Language::Wo);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Wo).unwrap(), "\"wo\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
