//! Region and batch grouping of locale codes.
//!
//! Both tables are slices of `(name, members)` pairs rather than maps so
//! their declaration order is preserved: a code present in more than one
//! bucket resolves to the first-declared bucket.

/// Named region buckets, in declaration order
pub static REGIONS: &[(&str, &[&str])] = &[
    ("east-asia", &["zh-CN", "zh-TW", "ja", "ko"]),
    ("europe", &["es", "fr", "de", "ru"]),
    ("americas", &["en", "pt-BR"]),
];

/// Batch-operation buckets, in declaration order. Used to process related
/// locales together, e.g. when exporting or pre-rendering by script.
pub static LOCALE_GROUPS: &[(&str, &[&str])] = &[
    ("asian", &["zh-CN", "zh-TW", "ja", "ko"]),
    ("western", &["en", "es", "fr", "de", "ru", "pt-BR"]),
];

/// Members of the first batch bucket containing the code.
///
/// Codes outside every bucket come back as a singleton group, so batch
/// callers can always iterate the result.
pub fn locale_group(code: &str) -> Vec<&str> {
    for (_, members) in LOCALE_GROUPS {
        if members.contains(&code) {
            return members.to_vec();
        }
    }
    vec![code]
}

/// Name of the region bucket containing the code, if any.
pub fn locale_region(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(_, members)| members.contains(&code))
        .map(|(name, _)| *name)
}
