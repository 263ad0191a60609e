//! Supported language codes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The closed set of languages a locale pack can be written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "de")]
    De,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "kr")]
    Kr,
    #[serde(rename = "nb")]
    Nb,
    #[serde(rename = "nl")]
    Nl,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "sl")]
    Sl,
    #[serde(rename = "uk")]
    Uk,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    /// Every supported language, in code order
    pub const ALL: &'static [Language] = &[
        Language::De,
        Language::En,
        Language::Fr,
        Language::Ja,
        Language::Kr,
        Language::Nb,
        Language::Nl,
        Language::Ru,
        Language::Sl,
        Language::Uk,
        Language::ZhCn,
        Language::ZhTw,
    ];

    /// The language code as written in locale packs
    pub const fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ja => "ja",
            Language::Kr => "kr",
            Language::Nb => "nb",
            Language::Nl => "nl",
            Language::Ru => "ru",
            Language::Sl => "sl",
            Language::Uk => "uk",
            Language::ZhCn => "zh-CN",
            Language::ZhTw => "zh-TW",
        }
    }

    /// Look up a language by its exact code
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.code()), Some(*lang));
        }
        assert_eq!(Language::ALL.len(), 12);
    }

    #[test]
    fn test_region_codes_are_exact() {
        assert_eq!(Language::parse("zh-CN"), Some(Language::ZhCn));
        assert_eq!(Language::parse("zh-cn"), None);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::ZhTw).unwrap();
        assert_eq!(json, "\"zh-TW\"");
        let lang: Language = serde_json::from_str("\"nb\"").unwrap();
        assert_eq!(lang, Language::Nb);
    }
}
