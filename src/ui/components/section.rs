use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use folio::content::portfolio::{Credential, Profile};
use folio::i18n::LanguageContext;

use crate::app::Section;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{Theme, ThemeColors};

fn heading(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors.heading())
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(colors.accent())),
        Span::styled(text.to_string(), Style::default().fg(colors.fg())),
    ])
}

fn paragraph(text: &str, style: Style) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

fn credential_lines(items: &[Credential], colors: &ThemeColors, lines: &mut Vec<Line<'static>>) {
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(
                item.title.clone(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", item.date),
                Style::default().fg(colors.text_dim()),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.organization),
            Style::default().fg(colors.accent()),
        )));
        lines.push(Line::from(""));
    }
}

/// Body lines for a text section, before wrapping. The hero and learning
/// panels draw themselves and yield nothing here.
pub fn section_lines(
    section: Section,
    profile: &Profile,
    i18n: &LanguageContext,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(colors.fg());
    let dim = Style::default().fg(colors.text_dim());
    let mut lines = Vec::new();

    match section {
        Section::Hero | Section::Learning => {}
        Section::About => {
            lines.extend(paragraph(&profile.about, text));
            if let Some(motto) = &profile.motto {
                lines.push(Line::from(""));
                lines.push(heading(i18n.translate("about.motto"), colors));
                lines.push(Line::from(Span::styled(
                    format!("\"{}\"", motto.quote),
                    Style::default()
                        .fg(colors.strong())
                        .add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(Span::styled(format!("  - {}", motto.author), dim)));
                lines.push(Line::from(""));
                lines.extend(paragraph(&motto.story, text));
            }
        }
        Section::Experience => {
            for job in &profile.experience {
                lines.push(Line::from(Span::styled(job.date.clone(), dim)));
                lines.push(Line::from(vec![
                    Span::styled(job.company.clone(), text.add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}", job.title),
                        Style::default().fg(colors.accent()),
                    ),
                ]));
                for item in &job.items {
                    lines.push(bullet(item, colors));
                }
                lines.push(Line::from(""));
            }
        }
        Section::Education => {
            for school in &profile.education {
                lines.push(Line::from(vec![
                    Span::styled(school.school.clone(), text.add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", school.date), dim),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", school.degree),
                    Style::default().fg(colors.accent()),
                )));
                if !school.grade.is_empty() {
                    lines.push(Line::from(Span::styled(format!("  {}", school.grade), dim)));
                }
                lines.push(Line::from(""));
            }
            if !profile.awards.is_empty() {
                lines.push(heading(i18n.translate("education.awards"), colors));
                lines.push(Line::from(""));
                credential_lines(&profile.awards, colors, &mut lines);
            }
        }
        Section::Projects => {
            for project in &profile.projects {
                lines.push(Line::from(Span::styled(
                    project.title.clone(),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )));
                lines.extend(paragraph(&project.description, text));
                lines.push(Line::from(""));
            }
        }
        Section::Skills => {
            for skill in &profile.skills {
                lines.push(bullet(skill, colors));
            }
        }
        Section::Certifications => credential_lines(&profile.certifications, colors, &mut lines),
    }

    lines
}

/// A bordered, scrollable portfolio section.
pub struct SectionPanel<'a> {
    pub section: Section,
    pub title: &'a str,
    pub profile: &'a Profile,
    pub i18n: &'a LanguageContext,
    pub scroll: u16,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for SectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.section == Section::Hero {
            let hero = vec![
                Line::from(Span::styled(
                    self.profile.name.clone(),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    self.i18n.translate("hero.role"),
                    Style::default().fg(colors.fg()),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    self.i18n.translate("hero.scroll"),
                    Style::default().fg(colors.text_dim()),
                )),
            ];
            let rect = centered_rect(60, 30, inner);
            Paragraph::new(hero)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(rect, buf);
            return;
        }

        Paragraph::new(section_lines(self.section, self.profile, self.i18n, colors))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::i18n::Language;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn experience_lists_every_item_as_bullet() {
        let profile = Profile::load(Language::En).unwrap();
        let i18n = LanguageContext::load(Language::En).unwrap();
        let text = plain(&section_lines(
            Section::Experience,
            &profile,
            &i18n,
            &ThemeColors::default(),
        ));
        let items: usize = profile.experience.iter().map(|e| e.items.len()).sum();
        assert_eq!(text.iter().filter(|l| l.starts_with("  • ")).count(), items);
        assert_eq!(text[0], profile.experience[0].date);
    }

    #[test]
    fn about_includes_translated_motto_heading() {
        let profile = Profile::load(Language::Ko).unwrap();
        let i18n = LanguageContext::load(Language::Ko).unwrap();
        let text = plain(&section_lines(
            Section::About,
            &profile,
            &i18n,
            &ThemeColors::default(),
        ));
        assert!(text.iter().any(|l| l == i18n.translate("about.motto")));
    }

    #[test]
    fn self_drawn_sections_yield_no_lines() {
        let profile = Profile::load(Language::En).unwrap();
        let i18n = LanguageContext::load(Language::En).unwrap();
        for section in [Section::Hero, Section::Learning] {
            assert!(section_lines(section, &profile, &i18n, &ThemeColors::default()).is_empty());
        }
    }
}
