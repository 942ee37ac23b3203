use rust_embed::Embed;
use serde::Deserialize;

use super::{ContentError, load_embedded};
use crate::i18n::Language;

#[derive(Embed)]
#[folder = "assets/portfolio/"]
struct PortfolioAssets;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Contact {
    pub email: String,
    pub blog: String,
    pub github: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Motto {
    pub quote: String,
    pub author: String,
    pub story: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub date: String,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Education {
    pub school: String,
    pub date: String,
    pub degree: String,
    pub grade: String,
}

/// Awards and certifications share this shape.
#[derive(Clone, Debug, Deserialize)]
pub struct Credential {
    pub title: String,
    pub date: String,
    pub organization: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    /// May span several lines; each line is shown as-is.
    pub description: String,
}

/// Biographical content for one language.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub name: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
    pub motto: Option<Motto>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub awards: Vec<Credential>,
    #[serde(default)]
    pub certifications: Vec<Credential>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Profile {
    pub fn load(language: Language) -> Result<Self, ContentError> {
        load_embedded::<PortfolioAssets, _>(&format!("{}.toml", language.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_default_to_empty() {
        let profile: Profile = toml::from_str(
            r#"
name = "A"
about = "B"
"#,
        )
        .unwrap();
        assert!(profile.motto.is_none());
        assert!(profile.awards.is_empty());
        assert!(profile.contact.email.is_empty());
    }

    #[test]
    fn both_languages_describe_the_same_career() {
        let en = Profile::load(Language::En).unwrap();
        let ko = Profile::load(Language::Ko).unwrap();
        assert_eq!(en.experience.len(), ko.experience.len());
        assert_eq!(en.projects.len(), ko.projects.len());
        assert_eq!(en.certifications.len(), ko.certifications.len());
        assert_eq!(en.skills, ko.skills);
        assert!(en.experience.iter().all(|e| !e.items.is_empty()));
    }
}
