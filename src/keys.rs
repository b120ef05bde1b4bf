//! Well-known UI text keys.
//!
//! Screens string against these dotted keys, so the set is closed: a typo in
//! a key is a compile error instead of a silent English fallback at runtime.
//! The serialized form of each variant is the exact key that appears in the
//! translation files under `i18n/`.

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Keys for common UI text slots shared across screens
#[derive(AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, IntoStaticStr, PartialEq)]
pub enum TextKey {
    #[strum(serialize = "common.save")]
    Save,
    #[strum(serialize = "common.cancel")]
    Cancel,
    #[strum(serialize = "common.close")]
    Close,
    #[strum(serialize = "common.delete")]
    Delete,
    #[strum(serialize = "common.edit")]
    Edit,
    #[strum(serialize = "common.add")]
    Add,
    #[strum(serialize = "common.search")]
    Search,
    #[strum(serialize = "common.loading")]
    Loading,
    #[strum(serialize = "common.error")]
    Error,
    #[strum(serialize = "common.confirm")]
    Confirm,
    #[strum(serialize = "common.yes")]
    Yes,
    #[strum(serialize = "common.no")]
    No,
    #[strum(serialize = "settings.title")]
    SettingsTitle,
    #[strum(serialize = "settings.language")]
    SettingsLanguage,
}

impl TextKey {
    /// All well-known keys
    pub fn all() -> impl Iterator<Item = TextKey> {
        Self::iter()
    }

    /// Dotted lookup key as it appears in the translation files
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Resolve the key in the active locale
    pub fn resolve(self) -> String {
        crate::detect::translate(self.key())
    }
}
