/// One selectable interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// A named block of the language picker.
#[derive(Debug, Clone, Copy)]
pub struct LanguageGroup {
    pub title: &'static str,
    pub languages: &'static [Language],
}

const fn lang(code: &'static str, name: &'static str, flag: &'static str) -> Language {
    Language { code, name, flag }
}

/// Picker layout. Group order and order inside each group are display order.
pub const LANGUAGE_GROUPS: &[LanguageGroup] = &[
    LanguageGroup {
        title: "MOST USED",
        languages: &[
            lang("en", "English", "🇺🇸"),
            lang("ru", "Русский", "🇷🇺"),
            lang("fr", "Français", "🇫🇷"),
            lang("de", "Deutsch", "🇩🇪"),
        ],
    },
    LanguageGroup {
        title: "SLAVIC",
        languages: &[
            lang("ua", "Українська", "🇺🇦"),
            lang("be", "Беларуская", "🇧🇾"),
            lang("pl", "Polski", "🇵🇱"),
            lang("cs", "Čeština", "🇨🇿"),
            lang("sk", "Slovenčina", "🇸🇰"),
            lang("sl", "Slovenščina", "🇸🇮"),
            lang("hr", "Hrvatski", "🇭🇷"),
            lang("sr", "Српски", "🇷🇸"),
            lang("bs", "Bosanski", "🇧🇦"),
            lang("bg", "Български", "🇧🇬"),
        ],
    },
    LanguageGroup {
        title: "ROMANCE",
        languages: &[
            lang("es", "Español", "🇪🇸"),
            lang("pt", "Português", "🇵🇹"),
            lang("it", "Italiano", "🇮🇹"),
            lang("ro", "Română", "🇷🇴"),
        ],
    },
    LanguageGroup {
        title: "GERMANIC",
        languages: &[
            lang("nl", "Nederlands", "🇳🇱"),
            lang("da", "Dansk", "🇩🇰"),
            lang("sv", "Svenska", "🇸🇪"),
            lang("no", "Norsk", "🇳🇴"),
            lang("is", "Íslenska", "🇮🇸"),
            lang("lb", "Lëtzebuergesch", "🇱🇺"),
        ],
    },
    LanguageGroup {
        title: "URALIC",
        languages: &[
            lang("fi", "Suomi", "🇫🇮"),
            lang("hu", "Magyar", "🇭🇺"),
            lang("et", "Eesti", "🇪🇪"),
        ],
    },
    LanguageGroup {
        title: "BALTIC",
        languages: &[lang("lv", "Latviešu", "🇱🇻"), lang("lt", "Lietuvių", "🇱🇹")],
    },
    LanguageGroup {
        title: "OTHER",
        languages: &[
            lang("el", "Ελληνικά", "🇬🇷"),
            lang("sq", "Shqip", "🇦🇱"),
            lang("ga", "Gaeilge", "🇮🇪"),
        ],
    },
];

/// All languages, flattened in picker order.
pub fn all_languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGE_GROUPS.iter().flat_map(|group| group.languages.iter())
}

pub fn find_language(code: &str) -> Option<&'static Language> {
    all_languages().find(|language| language.code == code)
}

/// The language shown as current: the match for `code`, else the first one.
pub fn language_or_first(code: &str) -> &'static Language {
    find_language(code).unwrap_or(&LANGUAGE_GROUPS[0].languages[0])
}
