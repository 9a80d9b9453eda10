use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

// Languages the demo's own labels come in
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "En",
            Language::Chinese => "中文",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::English, Language::Chinese]
    }
}

type Translations = HashMap<&'static str, &'static str>;

lazy_static! {
    static ref CURRENT_LANGUAGE: RwLock<Language> = RwLock::new(Language::default());
    static ref TRANSLATIONS: RwLock<HashMap<Language, Translations>> = RwLock::new(HashMap::new());
}

const EN: &[(&str, &str)] = &[
    // Selector defaults
    ("select_language", "Select language"),
    ("search_language", "Search language..."),
    ("language_not_found", "Language not found"),
    // Header
    ("app_name", "Language Selector"),
    ("open_from_host", "Languages"),
    ("settings", "Settings"),
    ("exit", "Exit"),
    // Settings panel
    ("coverage", "Names shown"),
    ("reverse_names", "International name first"),
    ("include_details", "Emit full entry"),
    ("enable_search", "Search box"),
    ("remember", "Remember last pick"),
    ("default_toggle", "Built-in toggle"),
    ("external_trigger", "Open from host button"),
    ("activation", "Open on"),
    ("theme", "Theme"),
    ("options", "Codes (comma separated, empty = all)"),
    ("sort_options", "Sort codes"),
    ("default_language", "Default code"),
    ("width", "Width"),
    ("unresolved", "Unknown codes: {}"),
    // Selection log
    ("selections", "Selections"),
    ("no_selections", "Nothing selected yet"),
    ("origin_user", "picked"),
    ("origin_restored", "restored"),
    ("clear", "Clear"),
];

const ZH: &[(&str, &str)] = &[
    ("select_language", "选择语言"),
    ("search_language", "搜索语言..."),
    ("language_not_found", "未找到语言"),
    ("app_name", "语言选择器"),
    ("open_from_host", "语言"),
    ("settings", "设置"),
    ("exit", "退出"),
    ("coverage", "显示名称"),
    ("reverse_names", "国际名称在前"),
    ("include_details", "输出完整条目"),
    ("enable_search", "搜索框"),
    ("remember", "记住上次选择"),
    ("default_toggle", "内置按钮"),
    ("external_trigger", "由宿主按钮打开"),
    ("activation", "打开方式"),
    ("theme", "主题"),
    ("options", "语言代码（逗号分隔，留空为全部）"),
    ("sort_options", "排序代码"),
    ("default_language", "默认代码"),
    ("width", "宽度"),
    ("unresolved", "未知代码：{}"),
    ("selections", "选择记录"),
    ("no_selections", "尚未选择"),
    ("origin_user", "选择"),
    ("origin_restored", "恢复"),
    ("clear", "清空"),
];

pub fn init() {
    let mut translations = HashMap::new();
    translations.insert(Language::English, EN.iter().copied().collect());
    translations.insert(Language::Chinese, ZH.iter().copied().collect());

    match TRANSLATIONS.write() {
        Ok(mut global) => *global = translations,
        Err(err) => tracing::error!("Failed to install translations: {}", err),
    }
}

pub fn set_language(lang: Language) {
    if let Ok(mut current) = CURRENT_LANGUAGE.write() {
        *current = lang;
    }
}

pub fn get_language() -> Language {
    CURRENT_LANGUAGE
        .read()
        .map(|current| *current)
        .unwrap_or_default()
}

// Falls back to the key itself when there is no translation
pub fn t(key: &str) -> String {
    let lang = get_language();
    TRANSLATIONS
        .read()
        .ok()
        .and_then(|translations| {
            translations
                .get(&lang)
                .and_then(|table| table.get(key))
                .map(|text| text.to_string())
        })
        .unwrap_or_else(|| key.to_string())
}

pub fn tf(key: &str, args: &[&str]) -> String {
    let mut result = t(key);
    for arg in args {
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_the_same_keys() {
        let en: Vec<_> = EN.iter().map(|(key, _)| *key).collect();
        let zh: Vec<_> = ZH.iter().map(|(key, _)| *key).collect();

        assert_eq!(en, zh);
    }

    #[test]
    fn translates_and_formats() {
        init();
        set_language(Language::English);

        assert_eq!(t("select_language"), "Select language");
        assert_eq!(t("missing_key"), "missing_key");
        assert_eq!(tf("unresolved", &["xx, yy"]), "Unknown codes: xx, yy");
    }
}
