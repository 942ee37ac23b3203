use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use folio::content::portfolio::Contact;

use crate::ui::theme::Theme;

pub struct NavItem<'a> {
    pub key: char,
    pub label: &'a str,
}

pub struct Sidebar<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub items: Vec<NavItem<'a>>,
    pub selected: usize,
    pub language_marker: &'a str,
    pub contact: &'a Contact,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for &Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(if self.focused {
                colors.border_focused()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.name,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.role, Style::default().fg(colors.fg()))),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let nav_lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = i == self.selected;
                let indicator = if is_selected { ">" } else { " " };
                Line::from(Span::styled(
                    format!(" {indicator} [{}] {}", item.key, item.label),
                    Style::default()
                        .fg(if is_selected {
                            colors.accent()
                        } else {
                            colors.fg()
                        })
                        .add_modifier(if is_selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                ))
            })
            .collect();
        Paragraph::new(nav_lines).render(layout[1], buf);

        let dim = Style::default().fg(colors.text_dim());
        let footer_lines = vec![
            Line::from(vec![
                Span::styled(" [L] ", Style::default().fg(colors.accent_dim())),
                Span::styled(
                    self.language_marker,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(format!(" {}", self.contact.email), dim)),
            Line::from(Span::styled(format!(" {}", self.contact.github), dim)),
            Line::from(Span::styled(format!(" {}", self.contact.blog), dim)),
        ];
        Paragraph::new(footer_lines).render(layout[2], buf);
    }
}
