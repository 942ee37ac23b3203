//! Display-language state and string lookup.
//!
//! There is no global locale: a [`LanguageContext`] is owned by the app and
//! handed by reference to whatever draws text. [`LanguageContext::set_language`]
//! is the only way to change the active language.

use std::collections::HashMap;
use std::fmt;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::content::{ContentError, load_embedded};

#[derive(Embed)]
#[folder = "assets/locales/"]
struct LocaleAssets;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ko,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ko];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    /// Sidebar toggle label.
    pub fn marker(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ko => "KR",
        }
    }

    /// Accepts `en`, `ko`, `kr` and regional variants such as `en-US` or
    /// `ko_KR`, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        if code.starts_with("en") {
            Some(Language::En)
        } else if code.starts_with("ko") || code == "kr" {
            Some(Language::Ko)
        } else {
            None
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub type Translations = HashMap<String, String>;

pub struct LanguageContext {
    language: Language,
    en: Translations,
    ko: Translations,
}

impl LanguageContext {
    /// Load the bundled string tables and start in `language`.
    pub fn load(language: Language) -> Result<Self, ContentError> {
        Ok(Self::with_tables(
            language,
            load_embedded::<LocaleAssets, _>("en.toml")?,
            load_embedded::<LocaleAssets, _>("ko.toml")?,
        ))
    }

    pub fn with_tables(language: Language, en: Translations, ko: Translations) -> Self {
        Self { language, en, ko }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::info!(from = %self.language, to = %language, "language changed");
        }
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggle());
    }

    fn table(&self) -> &Translations {
        match self.language {
            Language::En => &self.en,
            Language::Ko => &self.ko,
        }
    }

    /// Display string for `key` in the active language, or `key` itself when
    /// the table has no entry.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table().get(key).map(String::as_str).unwrap_or(key)
    }

    /// [`translate`](Self::translate), then substitute `{name}` placeholders.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}
