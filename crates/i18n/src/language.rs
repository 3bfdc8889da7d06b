// Chunk: docs/chunks/localization_store - Language catalogs and change notification

use std::fmt;
use std::str::FromStr;

use crate::I18nError;

/// Language used when nothing else is configured and as the catalog fallback.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Hr,
    Ja,
    Zh,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Hr,
        Language::Ja,
        Language::Zh,
    ];

    /// Short language tag, e.g. `"hr"`.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Hr => "hr",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    /// The language's own name for itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::Hr => "Hrvatski",
            Language::Ja => "日本語",
            Language::Zh => "中文",
        }
    }

    /// Parses a language tag.
    ///
    /// Matching is case-insensitive and ignores any region subtag, so `"en-US"`
    /// and `"HR_hr"` are accepted.
    pub fn from_tag(tag: &str) -> Result<Self, I18nError> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.tag() == primary)
            .ok_or_else(|| I18nError::UnknownLanguage(tag.to_string()))
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
