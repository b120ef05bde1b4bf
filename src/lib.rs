//! localekit - Static locale registry and translation lookup
//!
//! This library provides the locale metadata a desktop application needs to
//! offer a language picker: display names, flag glyphs, font stacks, and
//! region grouping, plus thin wrappers around the translation engine.
//!
//! ## Module Structure
//!
//! - [`registry`] - The authoritative table of supported locales and lookups
//! - [`fonts`] - Per-locale font stacks for rendering each script
//! - [`groups`] - Region and batch grouping of locale codes
//! - [`keys`] - Well-known dotted translation keys shared across screens
//! - [`detect`] - Active-locale selection and translation lookup
//! - [`settings`] - Locale preference persistence

#[macro_use]
extern crate rust_i18n;

// Initialize i18n with translation files from the i18n directory
// Fallback to English if a translation is missing
i18n!("i18n", fallback = "en");

pub mod detect;
pub mod fonts;
pub mod groups;
pub mod keys;
pub mod registry;
pub mod settings;

pub use detect::{active_locale, init_locale, normalize_locale, set_active_locale, translate};
pub use fonts::font_family;
pub use groups::{locale_group, locale_region, LOCALE_GROUPS, REGIONS};
pub use keys::TextKey;
pub use registry::{
    is_rtl, is_valid_locale_code, locale_display_string, locale_info, locales_for_dropdown,
    LocaleRecord, DEFAULT_LOCALE, SUPPORTED_LOCALES,
};
pub use settings::{LocalePreference, SettingsError};
