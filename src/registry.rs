//! The authoritative table of supported locales.
//!
//! Every lookup in this module degrades gracefully: an unknown locale code
//! returns an absence signal or a documented fallback, never an error. UI
//! callers must be able to feed untrusted codes (config files, URLs, stored
//! preferences) straight into these functions.

use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Locale activated when no valid preference or detection result is available
pub const DEFAULT_LOCALE: &str = "en";

/// Locale codes rendered right-to-left. Empty until an RTL language ships;
/// [`is_rtl`] keys off this set so the extension point stays in place.
const RTL_LOCALES: &[&str] = &[];

/// Supported locales in declaration order. This order is the canonical one;
/// UI listings sort a copy by English name instead (see
/// [`locales_for_dropdown`]).
pub static SUPPORTED_LOCALES: &[LocaleRecord] = &[
    LocaleRecord {
        code: "en",
        native_name: "English",
        english_name: "English",
        flag: Some("🇺🇸"),
    },
    LocaleRecord {
        code: "zh-CN",
        native_name: "简体中文",
        english_name: "Chinese (Simplified)",
        flag: Some("🇨🇳"),
    },
    LocaleRecord {
        code: "zh-TW",
        native_name: "繁體中文",
        english_name: "Chinese (Traditional)",
        flag: Some("🇹🇼"),
    },
    LocaleRecord {
        code: "ja",
        native_name: "日本語",
        english_name: "Japanese",
        flag: Some("🇯🇵"),
    },
    LocaleRecord {
        code: "ko",
        native_name: "한국어",
        english_name: "Korean",
        flag: Some("🇰🇷"),
    },
    LocaleRecord {
        code: "es",
        native_name: "Español",
        english_name: "Spanish",
        flag: Some("🇪🇸"),
    },
    LocaleRecord {
        code: "fr",
        native_name: "Français",
        english_name: "French",
        flag: Some("🇫🇷"),
    },
    LocaleRecord {
        code: "de",
        native_name: "Deutsch",
        english_name: "German",
        flag: Some("🇩🇪"),
    },
    LocaleRecord {
        code: "ru",
        native_name: "Русский",
        english_name: "Russian",
        flag: Some("🇷🇺"),
    },
    LocaleRecord {
        code: "pt-BR",
        native_name: "Português (Brasil)",
        english_name: "Portuguese (Brazil)",
        flag: Some("🇧🇷"),
    },
];

// ============================================================================
// Types
// ============================================================================

/// Metadata for one supported locale
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleRecord {
    /// BCP 47 style tag, e.g. "en" or "zh-CN"
    pub code: &'static str,
    /// Name of the language in its own script
    pub native_name: &'static str,
    /// English name, used as the sort key for listings
    pub english_name: &'static str,
    /// Flag glyph shown next to the name, if the locale has one
    pub flag: Option<&'static str>,
}

// ============================================================================
// Lookups
// ============================================================================

/// Look up the record for a locale code.
pub fn locale_info(code: &str) -> Option<&'static LocaleRecord> {
    SUPPORTED_LOCALES.iter().find(|record| record.code == code)
}

/// Format a locale for display, e.g. `🇯🇵 日本語 (Japanese)`.
///
/// Unknown codes are returned unchanged so a stale stored preference still
/// renders as something rather than breaking the picker.
pub fn locale_display_string(code: &str, include_flag: bool) -> String {
    match locale_info(code) {
        Some(record) => match record.flag.filter(|_| include_flag) {
            Some(flag) => format!("{} {} ({})", flag, record.native_name, record.english_name),
            None => format!("{} ({})", record.native_name, record.english_name),
        },
        None => code.to_string(),
    }
}

/// All supported locales sorted by English name, for language pickers.
///
/// Returns a fresh copy each call; the canonical table keeps its declaration
/// order.
pub fn locales_for_dropdown() -> Vec<&'static LocaleRecord> {
    let mut records: Vec<&'static LocaleRecord> = SUPPORTED_LOCALES.iter().collect();
    records.sort_by_key(|record| record.english_name);
    records
}

/// Whether a code names a supported locale. Use this at the boundary between
/// untrusted input and the closed set of supported codes.
pub fn is_valid_locale_code(code: &str) -> bool {
    locale_info(code).is_some()
}

/// Whether a locale renders right-to-left.
pub fn is_rtl(code: &str) -> bool {
    RTL_LOCALES.contains(&code)
}
