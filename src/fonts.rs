//! Per-locale font stacks.
//!
//! CJK scripts need dedicated fonts; Latin and Cyrillic locales share the
//! system stack. The mapping is total: codes without an explicit entry get
//! the default locale's stack.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::registry::DEFAULT_LOCALE;

/// Stack for Latin/Cyrillic scripts and the fallback for unmapped codes
const DEFAULT_FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

/// Mapping from locale code to the font stack used to render its script
static FONT_FAMILIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(DEFAULT_LOCALE, DEFAULT_FONT_STACK);
    map.insert(
        "zh-CN",
        "\"PingFang SC\", \"Microsoft YaHei\", \"Noto Sans SC\", sans-serif",
    );
    map.insert(
        "zh-TW",
        "\"PingFang TC\", \"Microsoft JhengHei\", \"Noto Sans TC\", sans-serif",
    );
    map.insert(
        "ja",
        "\"Hiragino Kaku Gothic ProN\", \"Yu Gothic\", \"Noto Sans JP\", sans-serif",
    );
    map.insert(
        "ko",
        "\"Apple SD Gothic Neo\", \"Malgun Gothic\", \"Noto Sans KR\", sans-serif",
    );

    map
});

/// Font stack for a locale. Unknown or unmapped codes get the default
/// locale's stack, so the result is never empty.
pub fn font_family(code: &str) -> &'static str {
    FONT_FAMILIES.get(code).copied().unwrap_or(DEFAULT_FONT_STACK)
}
