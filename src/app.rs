use anyhow::Result;
use tracing::debug;

use folio::content::ContentStore;
use folio::content::portfolio::Profile;
use folio::i18n::{Language, LanguageContext};
use folio::learning::Navigator;

use crate::config::Config;
use crate::ui::theme::Theme;

/// Portfolio sections in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Education,
    Projects,
    Skills,
    Certifications,
    Learning,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
        Section::Learning,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Sidebar label key.
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Hero => "nav.hero",
            Section::About => "nav.about",
            Section::Experience => "nav.experience",
            Section::Education => "nav.education",
            Section::Projects => "nav.projects",
            Section::Skills => "nav.skills",
            Section::Certifications => "nav.certifications",
            Section::Learning => "nav.learning",
        }
    }

    /// Panel heading key. The hero panel has none and reuses its nav label.
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Hero => "nav.hero",
            Section::About => "about.title",
            Section::Experience => "experience.title",
            Section::Education => "education.title",
            Section::Projects => "projects.title",
            Section::Skills => "skills.title",
            Section::Certifications => "certifications.title",
            Section::Learning => "learning.title",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Main,
}

pub struct App {
    pub section: Section,
    pub focus: Focus,
    /// Whether the last drawn layout had room for the sidebar.
    pub sidebar_visible: bool,
    /// Scroll offset of the text sections; the learning detail keeps its own.
    pub scroll: u16,
    pub i18n: LanguageContext,
    pub navigator: Navigator<'static>,
    pub content: &'static ContentStore,
    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, content: &'static ContentStore) -> Result<Self> {
        let language = config.language();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "unknown theme, using default");
            Theme::default()
        });
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let i18n = LanguageContext::load(language)?;

        Ok(Self {
            section: Section::Hero,
            focus: Focus::Sidebar,
            sidebar_visible: true,
            scroll: 0,
            i18n,
            navigator: Navigator::new(content.catalogue(language)),
            content,
            theme,
            config,
            should_quit: false,
        })
    }

    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    pub fn profile(&self) -> &'static Profile {
        self.content.profile(self.language())
    }

    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            debug!(?section, "select section");
        }
        self.section = section;
        self.scroll = 0;
    }

    pub fn next_section(&mut self) {
        let next = (self.section.index() + 1) % Section::ALL.len();
        self.select_section(Section::ALL[next]);
    }

    pub fn prev_section(&mut self) {
        let idx = self.section.index();
        let prev = if idx == 0 { Section::ALL.len() - 1 } else { idx - 1 };
        self.select_section(Section::ALL[prev]);
    }

    /// Pane that receives navigation keys. With the sidebar hidden, the main
    /// panel takes them whatever `focus` says.
    pub fn key_focus(&self) -> Focus {
        if self.sidebar_visible {
            self.focus
        } else {
            Focus::Main
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Main,
            Focus::Main => Focus::Sidebar,
        };
    }

    /// Switch display language. Learning navigation restarts at the category
    /// list of the new language's catalogue.
    pub fn set_language(&mut self, language: Language) {
        self.i18n.set_language(language);
        self.navigator.set_catalogue(self.content.catalogue(language));
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language().toggle());
    }

    /// Back one level in the learning browser; at its root, hand focus back
    /// to the sidebar.
    pub fn learning_back(&mut self) {
        if !self.navigator.back() {
            self.focus = Focus::Sidebar;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.section == Section::Learning {
            self.navigator.scroll_down(1);
        } else {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    pub fn scroll_up(&mut self) {
        if self.section == Section::Learning {
            self.navigator.scroll_up(1);
        } else {
            self.scroll = self.scroll.saturating_sub(1);
        }
    }
}
