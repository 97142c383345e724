//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod pl_pl;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 波兰语
    PlPl,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::PlPl]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::PlPl => "Polski",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PlPl => "pl-PL",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "pl-PL" | "pl" => Some(Language::PlPl),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::PlPl,
            Language::PlPl => Language::EnUs,
        }
    }

    /// 获取上一个语言（用于循环切换）
    #[must_use]
    pub fn prev(self) -> Language {
        self.next()
    }

    fn index(self) -> usize {
        match self {
            Language::EnUs => 0,
            Language::PlPl => 1,
        }
    }
}

/// 当前语言索引
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &pl_pl::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("pl"), Some(Language::PlPl));
        assert_eq!(Language::from_code("de-DE"), None);
    }

    #[test]
    fn cycling_visits_every_language() {
        assert_eq!(Language::EnUs.next(), Language::PlPl);
        assert_eq!(Language::PlPl.next(), Language::EnUs);
    }

    #[test]
    fn tables_differ_per_language() {
        assert_ne!(en_us::TRANSLATIONS.nav.hosts, pl_pl::TRANSLATIONS.nav.hosts);
        assert_eq!(en_us::TRANSLATIONS.nav.ip_registry, "IP Registry");
    }
}
