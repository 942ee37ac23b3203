use rust_embed::Embed;
use serde::Deserialize;

use super::{ContentError, load_embedded};
use crate::i18n::Language;

#[derive(Embed)]
#[folder = "assets/learning/"]
struct LearningAssets;

/// A single study note.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Body in the markdown subset understood by `learning::markdown`.
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// The notes for one language, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Category {
    /// Whether `topic` is one of this category's own entries (identity, not
    /// just a matching id).
    pub fn contains(&self, topic: &Topic) -> bool {
        self.topics.iter().any(|t| std::ptr::eq(t, topic))
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn position_of(&self, topic: &Topic) -> Option<usize> {
        self.topics.iter().position(|t| std::ptr::eq(t, topic))
    }
}

impl Catalogue {
    pub fn load(language: Language) -> Result<Self, ContentError> {
        load_embedded::<LearningAssets, _>(&format!("{}.toml", language.code()))
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.categories.iter().any(|c| std::ptr::eq(c, category))
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn position_of(&self, category: &Category) -> Option<usize> {
        self.categories.iter().position(|c| std::ptr::eq(c, category))
    }

    /// Resolve a `category/topic` id pair.
    pub fn find_topic(
        &self,
        category_id: &str,
        topic_id: &str,
    ) -> Result<(&Category, &Topic), ContentError> {
        let category = self
            .category(category_id)
            .ok_or_else(|| ContentError::UnknownCategory(category_id.to_string()))?;
        let topic = category
            .topic(topic_id)
            .ok_or_else(|| ContentError::UnknownTopic {
                category: category_id.to_string(),
                topic: topic_id.to_string(),
            })?;
        Ok((category, topic))
    }

    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogue {
        toml::from_str(
            r####"
[[categories]]
id = "db"
title = "Database"

[[categories.topics]]
id = "t1"
title = "Transactions"
description = "ACID"
content = "### ACID"

[[categories]]
id = "net"
title = "Networking"
"####,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_nested_topics_in_order() {
        let catalogue = sample();
        assert_eq!(catalogue.categories.len(), 2);
        assert_eq!(catalogue.categories[0].topics[0].id, "t1");
        assert!(catalogue.categories[1].topics.is_empty());
        assert_eq!(catalogue.topic_count(), 1);
    }

    #[test]
    fn heading_markers_survive_in_topic_content() {
        let catalogue = sample();
        assert_eq!(catalogue.categories[0].topics[0].content, "### ACID");
        assert_eq!(catalogue.categories[1].title, "Networking");
    }

    #[test]
    fn find_topic_reports_which_id_is_missing() {
        let catalogue = sample();
        assert!(catalogue.find_topic("db", "t1").is_ok());
        assert!(matches!(
            catalogue.find_topic("nope", "t1"),
            Err(ContentError::UnknownCategory(id)) if id == "nope"
        ));
        assert!(matches!(
            catalogue.find_topic("db", "t9"),
            Err(ContentError::UnknownTopic { topic, .. }) if topic == "t9"
        ));
    }

    #[test]
    fn contains_checks_identity_not_equality() {
        let catalogue = sample();
        let db = &catalogue.categories[0];
        let copy = db.topics[0].clone();
        assert!(db.contains(&db.topics[0]));
        assert!(!db.contains(&copy));
        assert_eq!(catalogue.position_of(&catalogue.categories[1]), Some(1));
    }

    #[test]
    fn bundled_catalogues_load() {
        for language in Language::ALL {
            let catalogue = Catalogue::load(language).unwrap();
            assert!(!catalogue.categories.is_empty());
        }
    }
}
