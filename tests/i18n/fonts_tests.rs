//! Tests for per-locale font stacks
//!
//! Tests cover:
//! - CJK locales getting script-specific stacks
//! - Total fallback to the default locale's stack
//! - Non-empty stacks for every supported code

use localekit::fonts::font_family;
use localekit::registry::{DEFAULT_LOCALE, SUPPORTED_LOCALES};

#[test]
fn test_simplified_chinese_uses_pingfang_sc() {
    assert!(font_family("zh-CN").contains("PingFang SC"));
}

#[test]
fn test_traditional_chinese_uses_pingfang_tc() {
    assert!(font_family("zh-TW").contains("PingFang TC"));
}

#[test]
fn test_japanese_and_korean_have_dedicated_stacks() {
    assert!(font_family("ja").contains("Noto Sans JP"));
    assert!(font_family("ko").contains("Noto Sans KR"));
}

#[test]
fn test_unknown_code_falls_back_to_default_stack() {
    assert_eq!(font_family("xx-unknown"), font_family(DEFAULT_LOCALE));
}

#[test]
fn test_unmapped_locale_falls_back_to_default_stack() {
    // Latin-script locales have no explicit entry
    assert_eq!(font_family("fr"), font_family(DEFAULT_LOCALE));
    assert_eq!(font_family("pt-BR"), font_family(DEFAULT_LOCALE));
}

#[test]
fn test_every_supported_code_has_a_stack() {
    for record in SUPPORTED_LOCALES {
        let stack = font_family(record.code);
        assert!(!stack.is_empty(), "empty font stack for {}", record.code);
        assert!(stack.contains("sans-serif"));
    }
}
