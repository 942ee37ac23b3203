use tracing::{debug, warn};

use crate::content::catalogue::{Catalogue, Category, Topic};

/// Where the learning browser currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationState<'c> {
    #[default]
    Categories,
    Topics {
        category: &'c Category,
    },
    Detail {
        category: &'c Category,
        topic: &'c Topic,
    },
}

impl<'c> NavigationState<'c> {
    /// 0 at the category list, 1 in a topic list, 2 reading a topic.
    pub fn depth(&self) -> usize {
        match self {
            NavigationState::Categories => 0,
            NavigationState::Topics { .. } => 1,
            NavigationState::Detail { .. } => 2,
        }
    }

    pub fn category(&self) -> Option<&'c Category> {
        match *self {
            NavigationState::Categories => None,
            NavigationState::Topics { category } | NavigationState::Detail { category, .. } => {
                Some(category)
            }
        }
    }

    pub fn topic(&self) -> Option<&'c Topic> {
        match *self {
            NavigationState::Detail { topic, .. } => Some(topic),
            _ => None,
        }
    }
}

/// Drill-down controller over one catalogue: categories → topics → detail,
/// one level at a time in each direction.
///
/// Besides the state proper it tracks a list cursor for keyboard selection
/// and a scroll offset for the detail view; both reset on every transition.
pub struct Navigator<'c> {
    catalogue: &'c Catalogue,
    state: NavigationState<'c>,
    cursor: usize,
    scroll: u16,
}

impl<'c> Navigator<'c> {
    pub fn new(catalogue: &'c Catalogue) -> Self {
        Self {
            catalogue,
            state: NavigationState::Categories,
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn catalogue(&self) -> &'c Catalogue {
        self.catalogue
    }

    pub fn state(&self) -> NavigationState<'c> {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Show `category`'s topics. Allowed from any state; a new category
    /// always replaces whatever was selected before.
    pub fn select_category(&mut self, category: &'c Category) {
        if !self.catalogue.contains(category) {
            contract_violation("category is not part of the active catalogue");
            return;
        }
        debug!(category = %category.id, "select category");
        self.state = NavigationState::Topics { category };
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Open `topic`. Only valid from the topic list of the category that owns it.
    pub fn select_topic(&mut self, topic: &'c Topic) {
        let NavigationState::Topics { category } = self.state else {
            contract_violation("topic selected outside a topic list");
            return;
        };
        if !category.contains(topic) {
            contract_violation("topic does not belong to the selected category");
            return;
        }
        debug!(category = %category.id, topic = %topic.id, "select topic");
        self.state = NavigationState::Detail { category, topic };
        self.scroll = 0;
    }

    /// Go up one level, clearing the selection made at that level. Returns
    /// `false` (and changes nothing) at the category list.
    pub fn back(&mut self) -> bool {
        match self.state {
            NavigationState::Categories => false,
            NavigationState::Topics { category } => {
                debug!(category = %category.id, "back to categories");
                self.state = NavigationState::Categories;
                self.cursor = self.catalogue.position_of(category).unwrap_or(0);
                self.scroll = 0;
                true
            }
            NavigationState::Detail { category, topic } => {
                debug!(topic = %topic.id, "back to topics");
                self.state = NavigationState::Topics { category };
                self.cursor = category.position_of(topic).unwrap_or(0);
                self.scroll = 0;
                true
            }
        }
    }

    /// Point at another catalogue (the language changed). Selections made in
    /// the old catalogue are dropped and browsing restarts at its category list.
    pub fn set_catalogue(&mut self, catalogue: &'c Catalogue) {
        self.catalogue = catalogue;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = NavigationState::Categories;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Number of selectable rows in the current view.
    pub fn list_len(&self) -> usize {
        match self.state {
            NavigationState::Categories => self.catalogue.categories.len(),
            NavigationState::Topics { category } => category.topics.len(),
            NavigationState::Detail { .. } => 0,
        }
    }

    pub fn cursor_next(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_prev(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        } else {
            self.cursor = len - 1;
        }
    }

    /// Select whatever the cursor points at.
    pub fn activate(&mut self) {
        match self.state {
            NavigationState::Categories => {
                if let Some(category) = self.catalogue.categories.get(self.cursor) {
                    self.select_category(category);
                }
            }
            NavigationState::Topics { category } => {
                if let Some(topic) = category.topics.get(self.cursor) {
                    self.select_topic(topic);
                }
            }
            NavigationState::Detail { .. } => {}
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

fn contract_violation(what: &str) {
    if cfg!(debug_assertions) {
        panic!("learning navigator contract violated: {what}");
    }
    warn!(what, "ignoring invalid learning navigation");
}
