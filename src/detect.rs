//! Active-locale selection and translation lookup.
//!
//! Locale detection priority:
//! 1. Explicit preference (persisted settings or caller override)
//! 2. LOCALEKIT_LANG environment variable
//! 3. System locale
//! 4. Default: "en"

use crate::registry::{is_valid_locale_code, DEFAULT_LOCALE, SUPPORTED_LOCALES};

/// Environment variable consulted before the system locale
const ENV_VAR_NAME: &str = "LOCALEKIT_LANG";

/// Detect and activate the best locale for this session.
pub fn init_locale(preferred: Option<&str>) {
    let locale = detect_locale(preferred);
    tracing::info!("Activating locale {}", locale);
    rust_i18n::set_locale(locale);
}

fn detect_locale(preferred: Option<&str>) -> &'static str {
    if let Some(code) = preferred.and_then(normalize_locale) {
        return code;
    }

    if let Ok(env_lang) = std::env::var(ENV_VAR_NAME) {
        if let Some(code) = normalize_locale(&env_lang) {
            return code;
        }
    }

    if let Some(system_locale) = sys_locale::get_locale() {
        if let Some(code) = normalize_locale(&system_locale) {
            return code;
        }
    }

    DEFAULT_LOCALE
}

/// Map a raw locale tag onto a registry code.
///
/// Accepts the forms seen in practice: `en`, `en-US`, `en_US.UTF-8`,
/// `zh-cn`. Tries an exact case-insensitive match on the full tag first,
/// then falls back to matching the bare language, so `zh` resolves to the
/// first declared zh-* entry.
pub fn normalize_locale(input: &str) -> Option<&'static str> {
    let tag = input.split('.').next().unwrap_or(input).replace('_', "-");

    for record in SUPPORTED_LOCALES {
        if record.code.eq_ignore_ascii_case(&tag) {
            return Some(record.code);
        }
    }

    let lang = tag.split('-').next().unwrap_or(&tag);
    SUPPORTED_LOCALES
        .iter()
        .find(|record| {
            record
                .code
                .split('-')
                .next()
                .unwrap_or(record.code)
                .eq_ignore_ascii_case(lang)
        })
        .map(|record| record.code)
}

/// Activate a locale. Unknown codes activate the default locale instead;
/// the return value reports whether the requested code was used.
pub fn set_active_locale(code: &str) -> bool {
    if is_valid_locale_code(code) {
        rust_i18n::set_locale(code);
        true
    } else {
        tracing::warn!(
            "Unsupported locale {:?}, falling back to {}",
            code,
            DEFAULT_LOCALE
        );
        rust_i18n::set_locale(DEFAULT_LOCALE);
        false
    }
}

/// The currently active locale code.
pub fn active_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Resolve a dotted translation key in the active locale.
///
/// Missing keys come back as the key itself, which keeps UI text visible
/// (if wrong) rather than blank.
pub fn translate(key: &str) -> String {
    t!(key).into_owned()
}
