//! Display language and bilingual text

use serde::{Deserialize, Serialize};

/// Active display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn toggle(&self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Arabic is laid out right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Label for the status bar toggle
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }
}

/// A piece of UI text in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ar => self.ar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Locale::En.toggle(), Locale::Ar);
        assert_eq!(Locale::Ar.toggle(), Locale::En);
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn test_bilingual_picks_locale() {
        let text = Bilingual::new("Cancel", "إلغاء");
        assert_eq!(text.get(Locale::En), "Cancel");
        assert_eq!(text.get(Locale::Ar), "إلغاء");
    }

    #[test]
    fn test_serde_uses_language_code() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
