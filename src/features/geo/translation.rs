//! Name localization for regions and countries.
//!
//! Stored records carry their default-language name in `name` and an optional
//! `translations` map. States and cities have no translations.

use crate::features::geo::models::{Country, Region, Translations};

/// Records that carry localized names
pub trait Localized {
    fn default_name(&self) -> &str;

    fn translations(&self) -> Option<&Translations>;

    /// `translations[lang]` when present, otherwise the default name
    fn display_name(&self, lang: Option<&str>) -> &str {
        lang.and_then(|lang| self.translations().and_then(|t| t.get(lang)))
            .map(String::as_str)
            .unwrap_or_else(|| self.default_name())
    }
}

impl Localized for Region {
    fn default_name(&self) -> &str {
        &self.name
    }

    fn translations(&self) -> Option<&Translations> {
        self.translations.as_ref().map(|json| &json.0)
    }
}

impl Localized for Country {
    fn default_name(&self) -> &str {
        &self.name
    }

    fn translations(&self) -> Option<&Translations> {
        self.translations.as_ref().map(|json| &json.0)
    }
}

/// The language a caller asked for, if it is one names must be translated into.
///
/// Absent, empty, or default-language requests need no translation.
pub fn requested_language(lang: Option<&str>, default_language: &str) -> Option<String> {
    lang.map(str::trim)
        .filter(|lang| !lang.is_empty() && *lang != default_language)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn africa() -> Region {
        Region {
            id: 1,
            name: "Africa".to_string(),
            translations: Some(Json(Translations::from([
                ("fr".to_string(), "Afrique".to_string()),
                ("de".to_string(), "Afrika".to_string()),
            ]))),
        }
    }

    #[test]
    fn test_display_name_uses_translation() {
        assert_eq!(africa().display_name(Some("fr")), "Afrique");
        assert_eq!(africa().display_name(Some("de")), "Afrika");
    }

    #[test]
    fn test_display_name_falls_back_to_default() {
        assert_eq!(africa().display_name(Some("ja")), "Africa");
        assert_eq!(africa().display_name(None), "Africa");

        let bare = Region {
            translations: None,
            ..africa()
        };
        assert_eq!(bare.display_name(Some("fr")), "Africa");
    }

    #[test]
    fn test_requested_language() {
        assert_eq!(requested_language(Some("fr"), "en"), Some("fr".to_string()));
        assert_eq!(requested_language(Some("en"), "en"), None);
        assert_eq!(requested_language(Some(""), "en"), None);
        assert_eq!(requested_language(Some("  "), "en"), None);
        assert_eq!(requested_language(None, "en"), None);
    }
}
