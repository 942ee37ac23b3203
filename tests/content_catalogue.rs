use std::collections::HashSet;

use folio::content::ContentStore;
use folio::content::catalogue::Catalogue;
use folio::i18n::{Language, LanguageContext};
use folio::learning::markdown::{self, Block};
use folio::learning::{self, LearningView, NavigationState, Navigator};

fn store() -> ContentStore {
    ContentStore::load().expect("bundled content must load")
}

/// Markup outside `<pre><code>` blocks, where `###` and `**` would be leftovers.
fn outside_code(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(start) = rest.find("<pre><code") {
        out.push_str(&rest[..start]);
        match rest[start..].find("</code></pre>") {
            Some(end) => rest = &rest[start + end + "</code></pre>".len()..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

#[test]
fn ids_are_unique_and_categories_non_empty() {
    let store = store();
    for language in Language::ALL {
        let catalogue = store.catalogue(language);
        assert!(!catalogue.categories.is_empty(), "{language}: no categories");

        let mut category_ids = HashSet::new();
        for category in &catalogue.categories {
            assert!(
                category_ids.insert(&category.id),
                "{language}: duplicate category id {}",
                category.id
            );
            assert!(
                !category.topics.is_empty(),
                "{language}: category {} has no topics",
                category.id
            );

            let mut topic_ids = HashSet::new();
            for topic in &category.topics {
                assert!(
                    topic_ids.insert(&topic.id),
                    "{language}: duplicate topic id {}/{}",
                    category.id,
                    topic.id
                );
                assert!(!topic.title.is_empty());
                assert!(!topic.content.trim().is_empty());
            }
        }
    }
}

#[test]
fn languages_carry_the_same_ids_in_the_same_order() {
    let store = store();
    let ids = |catalogue: &Catalogue| -> Vec<(String, Vec<String>)> {
        catalogue
            .categories
            .iter()
            .map(|c| {
                (
                    c.id.clone(),
                    c.topics.iter().map(|t| t.id.clone()).collect(),
                )
            })
            .collect()
    };
    assert_eq!(
        ids(store.catalogue(Language::En)),
        ids(store.catalogue(Language::Ko))
    );
}

#[test]
fn every_topic_renders_without_leftover_markup() {
    let store = store();
    for language in Language::ALL {
        for category in &store.catalogue(language).categories {
            for topic in &category.topics {
                let html = markdown::render_html(&topic.content);
                let prose = outside_code(&html);
                assert!(
                    !prose.contains("###") && !prose.contains("**"),
                    "{language}: {}/{} leaves raw markup",
                    category.id,
                    topic.id
                );
            }
        }
    }
}

#[test]
fn every_code_fence_is_closed() {
    let store = store();
    for language in Language::ALL {
        for category in &store.catalogue(language).categories {
            for topic in &category.topics {
                let fences = topic
                    .content
                    .lines()
                    .filter(|l| l.starts_with("```"))
                    .count();
                assert_eq!(
                    fences % 2,
                    0,
                    "{language}: {}/{} has an unterminated fence",
                    category.id,
                    topic.id
                );
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let store = store();
    let topic = &store.catalogue(Language::En).categories[0].topics[0];
    assert_eq!(
        markdown::render_html(&topic.content),
        markdown::render_html(&topic.content)
    );
}

#[test]
fn drill_down_and_back_through_bundled_catalogue() {
    let store = store();
    let catalogue = store.catalogue(Language::En);
    let i18n = LanguageContext::load(Language::En).unwrap();
    let mut nav = Navigator::new(catalogue);

    let category = &catalogue.categories[0];
    nav.select_category(category);
    match learning::render(&nav, &i18n) {
        LearningView::Topics { rows, heading, .. } => {
            assert_eq!(heading, category.title);
            assert_eq!(rows.len(), category.topics.len());
        }
        other => panic!("expected topics view, got {other:?}"),
    }

    let topic = &category.topics[0];
    nav.select_topic(topic);
    assert!(matches!(
        nav.state(),
        NavigationState::Detail { category: c, topic: t }
            if std::ptr::eq(c, category) && std::ptr::eq(t, topic)
    ));
    match learning::render(&nav, &i18n) {
        LearningView::Detail { html, blocks, .. } => {
            let prose = outside_code(&html);
            assert!(!prose.contains("###") && !prose.contains("**"));
            assert!(blocks.iter().any(|b| matches!(b, Block::Heading { .. })));
        }
        other => panic!("expected detail view, got {other:?}"),
    }

    let mut steps = 0;
    while nav.back() {
        steps += 1;
    }
    assert_eq!(steps, 2);
    assert_eq!(nav.state(), NavigationState::Categories);

    let before = nav.state();
    assert!(!nav.back());
    assert_eq!(nav.state(), before);
}

#[test]
fn language_switch_restarts_at_categories() {
    let store = store();
    let mut nav = Navigator::new(store.catalogue(Language::En));
    nav.activate();
    nav.activate();
    assert_eq!(nav.state().depth(), 2);

    nav.set_catalogue(store.catalogue(Language::Ko));
    assert_eq!(nav.state(), NavigationState::Categories);
    assert_eq!(nav.cursor(), 0);
    assert!(std::ptr::eq(nav.catalogue(), store.catalogue(Language::Ko)));
}

#[test]
fn find_topic_resolves_and_reports_unknown_ids() {
    let store = store();
    let catalogue = store.catalogue(Language::Ko);
    let (category, topic) = catalogue.find_topic("database", "transaction").unwrap();
    assert_eq!(category.id, "database");
    assert_eq!(topic.id, "transaction");

    assert!(catalogue.find_topic("nope", "transaction").is_err());
    assert!(catalogue.find_topic("database", "nope").is_err());
}

#[test]
fn translation_tables_share_keys() {
    let keys = ["nav.learning", "learning.back", "learning.topics", "footer.hints"];
    for language in Language::ALL {
        let i18n = LanguageContext::load(language).unwrap();
        for key in keys {
            assert_ne!(i18n.translate(key), key, "{language}: missing key {key}");
        }
    }
}
