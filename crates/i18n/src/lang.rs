//! Supported UI languages and locale negotiation

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::Serialize;
use unic_langid::LanguageIdentifier;

/// Language used when nothing better matches
pub const DEFAULT_LANGUAGE: &str = "en";

/// A UI language offered in the language picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// BCP 47 primary language subtag
    pub code: &'static str,
    /// English name
    pub name: &'static str,
    /// Name in the language itself
    pub native_name: &'static str,
}

/// Languages the client can be displayed in, in picker order
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English", native_name: "English" },
    Language { code: "es", name: "Spanish", native_name: "Español" },
    Language { code: "fr", name: "French", native_name: "Français" },
    Language { code: "ru", name: "Russian", native_name: "Русский" },
    Language { code: "uz", name: "Uzbek", native_name: "Oʻzbekcha" },
    Language { code: "kk", name: "Kazakh", native_name: "Қазақша" },
    Language { code: "ky", name: "Kyrgyz", native_name: "Кыргызча" },
];

impl Language {
    /// Look up a supported language by exact code
    pub fn find(code: &str) -> Option<&'static Language> {
        SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
    }
}

fn parse_tag(tag: &str) -> Option<LanguageIdentifier> {
    // Device locales come as "en-US" on one platform and "en_US" on the other.
    tag.trim().replace('_', "-").parse().ok()
}

/// Best supported language for a list of requested locales, most preferred first
pub fn negotiate(requested: &[&str]) -> &'static str {
    let available: Vec<LanguageIdentifier> = SUPPORTED_LANGUAGES
        .iter()
        .filter_map(|lang| parse_tag(lang.code))
        .collect();
    let requested: Vec<LanguageIdentifier> =
        requested.iter().filter_map(|tag| parse_tag(tag)).collect();
    let default = parse_tag(DEFAULT_LANGUAGE);

    negotiate_languages(
        &requested,
        &available,
        default.as_ref(),
        NegotiationStrategy::Lookup,
    )
    .first()
    .and_then(|id| Language::find(id.language.as_str()))
    .map(|lang| lang.code)
    .unwrap_or(DEFAULT_LANGUAGE)
}

/// Language to start with: the saved choice if still supported, else the device locale
pub fn resolve_startup_language(saved: Option<&str>, device_locale: &str) -> &'static str {
    if let Some(lang) = saved.and_then(Language::find) {
        return lang.code;
    }
    negotiate(&[device_locale])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_supported_language() {
        let uz = Language::find("uz").unwrap();
        assert_eq!(uz.name, "Uzbek");
        assert!(Language::find("de").is_none());
    }

    #[test]
    fn test_negotiate_region_variants() {
        assert_eq!(negotiate(&["ru-RU"]), "ru");
        assert_eq!(negotiate(&["fr_CA"]), "fr");
        assert_eq!(negotiate(&["en-GB"]), "en");
    }

    #[test]
    fn test_negotiate_preference_order() {
        assert_eq!(negotiate(&["de-DE", "kk-KZ", "en-US"]), "kk");
    }

    #[test]
    fn test_negotiate_falls_back_to_default() {
        assert_eq!(negotiate(&["ja-JP"]), DEFAULT_LANGUAGE);
        assert_eq!(negotiate(&[]), DEFAULT_LANGUAGE);
        assert_eq!(negotiate(&["not a locale!"]), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_startup_language_prefers_saved_choice() {
        assert_eq!(resolve_startup_language(Some("ky"), "en-US"), "ky");
        assert_eq!(resolve_startup_language(Some("xx"), "es-MX"), "es");
        assert_eq!(resolve_startup_language(None, "uz_UZ"), "uz");
    }

    #[test]
    fn test_language_serializes_for_picker() {
        let json = serde_json::to_value(Language::find("es").unwrap()).unwrap();
        assert_eq!(json["nativeName"], "Español");
    }
}
