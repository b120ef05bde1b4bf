//! Tests for region and batch grouping
//!
//! Tests cover:
//! - Batch bucket resolution and the singleton fallback
//! - Region lookup
//! - Referential integrity between grouping tables and the registry

use localekit::groups::{locale_group, locale_region, LOCALE_GROUPS, REGIONS};
use localekit::registry::{is_valid_locale_code, SUPPORTED_LOCALES};

// ============================================
// Batch Group Tests
// ============================================

#[test]
fn test_japanese_resolves_to_asian_bucket() {
    assert_eq!(locale_group("ja"), vec!["zh-CN", "zh-TW", "ja", "ko"]);
}

#[test]
fn test_asian_bucket_is_declared_first() {
    assert_eq!(LOCALE_GROUPS[0].0, "asian");
    assert_eq!(
        LOCALE_GROUPS[0].1.to_vec(),
        vec!["zh-CN", "zh-TW", "ja", "ko"]
    );
}

#[test]
fn test_unknown_code_gets_singleton_group() {
    assert_eq!(locale_group("xx-unknown"), vec!["xx-unknown"]);
}

#[test]
fn test_every_supported_code_is_in_some_bucket() {
    for record in SUPPORTED_LOCALES {
        let group = locale_group(record.code);
        assert!(group.contains(&record.code));
        assert!(
            group.len() > 1,
            "{} fell through to a singleton group",
            record.code
        );
    }
}

// ============================================
// Region Tests
// ============================================

#[test]
fn test_region_lookup() {
    assert_eq!(locale_region("ja"), Some("east-asia"));
    assert_eq!(locale_region("fr"), Some("europe"));
    assert_eq!(locale_region("pt-BR"), Some("americas"));
}

#[test]
fn test_region_lookup_unknown_code() {
    assert_eq!(locale_region("xx-unknown"), None);
}

#[test]
fn test_every_supported_code_has_a_region() {
    for record in SUPPORTED_LOCALES {
        assert!(
            locale_region(record.code).is_some(),
            "{} has no region",
            record.code
        );
    }
}

// ============================================
// Referential Integrity Tests
// ============================================

#[test]
fn test_region_table_only_references_registry_codes() {
    for (name, members) in REGIONS {
        for code in *members {
            assert!(
                is_valid_locale_code(code),
                "region {:?} references unknown locale {:?}",
                name,
                code
            );
        }
    }
}

#[test]
fn test_batch_groups_only_reference_registry_codes() {
    for (name, members) in LOCALE_GROUPS {
        for code in *members {
            assert!(
                is_valid_locale_code(code),
                "group {:?} references unknown locale {:?}",
                name,
                code
            );
        }
    }
}
