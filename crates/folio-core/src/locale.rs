//! Locale selection and per-locale text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error type for locale parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale: {0:?} (expected \"en\" or \"zh\")")]
pub struct LocaleParseError(String);

/// Supported display languages.
///
/// A closed set: unknown locale strings are a parse error, not a
/// catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            other => Err(LocaleParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One string per supported locale.
///
/// Work records and projects carry their display text in both languages;
/// the renderer picks one side at the last moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub en: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zh: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Text for the locale, falling back to the other side when empty so
    /// the lookup is total.
    pub fn for_locale(&self, locale: Locale) -> &str {
        let (preferred, fallback) = match locale {
            Locale::En => (&self.en, &self.zh),
            Locale::Zh => (&self.zh, &self.en),
        };
        if preferred.is_empty() {
            fallback
        } else {
            preferred
        }
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.zh.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_default_is_en() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert!(matches!("de".parse::<Locale>(), Err(LocaleParseError(_))));
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn locale_roundtrip_serde() {
        let json = serde_json::to_string(&Locale::Zh).unwrap();
        assert_eq!(json, r#""zh""#);
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::Zh);
    }

    #[test]
    fn localized_text_lookup() {
        let text = LocalizedText::new("Backend Engineer", "後端工程師");
        assert_eq!(text.for_locale(Locale::En), "Backend Engineer");
        assert_eq!(text.for_locale(Locale::Zh), "後端工程師");
    }

    #[test]
    fn localized_text_falls_back_when_empty() {
        let text = LocalizedText::new("Side Project", "");
        assert_eq!(text.for_locale(Locale::Zh), "Side Project");

        let text = LocalizedText::new("", "接案工作");
        assert_eq!(text.for_locale(Locale::En), "接案工作");
    }

    #[test]
    fn localized_text_skips_empty_sides() {
        let text = LocalizedText::new("Hello", "");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#"{"en":"Hello"}"#);
        let back: LocalizedText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }
}
