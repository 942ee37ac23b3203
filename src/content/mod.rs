pub mod catalogue;
pub mod portfolio;

use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::i18n::Language;
use catalogue::Catalogue;
use portfolio::Profile;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("embedded asset `{0}` is missing")]
    MissingAsset(String),
    #[error("embedded asset `{name}` is not valid UTF-8")]
    InvalidUtf8 {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("failed to parse `{name}`")]
    Parse {
        name: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("no learning category `{0}`")]
    UnknownCategory(String),
    #[error("no topic `{topic}` in category `{category}`")]
    UnknownTopic { category: String, topic: String },
}

/// Deserialize a TOML file bundled into the binary by `E`.
pub(crate) fn load_embedded<E: RustEmbed, T: DeserializeOwned>(
    name: &str,
) -> Result<T, ContentError> {
    let file = E::get(name).ok_or_else(|| ContentError::MissingAsset(name.to_string()))?;
    let text = std::str::from_utf8(file.data.as_ref()).map_err(|source| {
        ContentError::InvalidUtf8 {
            name: name.to_string(),
            source,
        }
    })?;
    toml::from_str(text).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Everything one language shows: its notes catalogue and its profile.
#[derive(Clone, Debug)]
pub struct LanguageContent {
    pub catalogue: Catalogue,
    pub profile: Profile,
}

/// All bundled content, loaded once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct ContentStore {
    en: LanguageContent,
    ko: LanguageContent,
}

impl ContentStore {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            en: Self::load_language(Language::En)?,
            ko: Self::load_language(Language::Ko)?,
        })
    }

    fn load_language(language: Language) -> Result<LanguageContent, ContentError> {
        Ok(LanguageContent {
            catalogue: Catalogue::load(language)?,
            profile: Profile::load(language)?,
        })
    }

    pub fn get(&self, language: Language) -> &LanguageContent {
        match language {
            Language::En => &self.en,
            Language::Ko => &self.ko,
        }
    }

    pub fn catalogue(&self, language: Language) -> &Catalogue {
        &self.get(language).catalogue
    }

    pub fn profile(&self, language: Language) -> &Profile {
        &self.get(language).profile
    }
}
