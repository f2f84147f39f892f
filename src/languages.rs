use serde::Serialize;

/// Source-language sentinel asking the vendor to detect the language itself.
pub const AUTO_DETECT: &str = "auto";

/// Locale handed to speech synthesis when no concrete language is known.
pub const DEFAULT_SPEECH_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: AUTO_DETECT, name: "Auto-detect" },
    Language { code: "en", name: "English" },
    Language { code: "fr", name: "French" },
    Language { code: "es", name: "Spanish" },
    Language { code: "de", name: "German" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "zh-Hans", name: "Chinese (Simplified)" },
];

pub fn is_auto_detect(code: &str) -> bool {
    code == AUTO_DETECT
}

pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub fn source_languages() -> Vec<Language> {
    LANGUAGES.to_vec()
}

/// Every language except the auto-detect sentinel.
pub fn target_languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .filter(|l| !is_auto_detect(l.code))
        .copied()
        .collect()
}

pub fn speech_locale(to: &str) -> &str {
    if is_auto_detect(to) {
        DEFAULT_SPEECH_LOCALE
    } else {
        to
    }
}
