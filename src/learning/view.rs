use crate::i18n::LanguageContext;
use crate::learning::markdown::{self, Block};
use crate::learning::navigator::{NavigationState, Navigator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCard<'c> {
    pub title: &'c str,
    pub topic_count: usize,
    pub count_label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow<'c> {
    pub title: &'c str,
    pub description: &'c str,
    pub selected: bool,
}

/// What the learning panel shows, independent of how it gets drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearningView<'c> {
    Categories {
        cards: Vec<CategoryCard<'c>>,
    },
    Topics {
        back_label: String,
        heading: &'c str,
        rows: Vec<TopicRow<'c>>,
    },
    Detail {
        back_label: String,
        title: &'c str,
        html: String,
        blocks: Vec<Block>,
        scroll: u16,
    },
}

impl LearningView<'_> {
    /// Back label and title shown above a topic list or article. The
    /// category list is the root and has neither.
    pub fn header(&self) -> Option<(&str, &str)> {
        match self {
            LearningView::Categories { .. } => None,
            LearningView::Topics {
                back_label,
                heading,
                ..
            } => Some((back_label.as_str(), *heading)),
            LearningView::Detail {
                back_label, title, ..
            } => Some((back_label.as_str(), *title)),
        }
    }
}

/// Describe the navigator's current view in the active language.
pub fn render<'c>(nav: &Navigator<'c>, i18n: &LanguageContext) -> LearningView<'c> {
    match nav.state() {
        NavigationState::Categories => LearningView::Categories {
            cards: nav
                .catalogue()
                .categories
                .iter()
                .enumerate()
                .map(|(i, category)| {
                    let count = category.topics.len();
                    let count_text = count.to_string();
                    CategoryCard {
                        title: &category.title,
                        topic_count: count,
                        count_label: i18n
                            .translate_with("learning.topics", &[("count", count_text.as_str())]),
                        selected: i == nav.cursor(),
                    }
                })
                .collect(),
        },
        NavigationState::Topics { category } => LearningView::Topics {
            back_label: i18n.translate("learning.back").to_string(),
            heading: &category.title,
            rows: category
                .topics
                .iter()
                .enumerate()
                .map(|(i, topic)| TopicRow {
                    title: &topic.title,
                    description: &topic.description,
                    selected: i == nav.cursor(),
                })
                .collect(),
        },
        NavigationState::Detail { topic, .. } => {
            let blocks = markdown::parse(&topic.content);
            LearningView::Detail {
                back_label: i18n.translate("learning.back").to_string(),
                title: &topic.title,
                html: markdown::to_html(&blocks),
                blocks,
                scroll: nav.scroll(),
            }
        }
    }
}
