use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use folio::learning::LearningView;

use crate::ui::components::markdown_view::block_lines;
use crate::ui::theme::Theme;

/// Rows taken by the back hint, the title and a spacer above a topic list or
/// article body.
pub const HEADER_ROWS: u16 = 3;

pub struct LearningPanel<'a> {
    view: &'a LearningView<'a>,
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> LearningPanel<'a> {
    pub fn new(view: &'a LearningView<'a>, title: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            view,
            title,
            focused,
            theme,
        }
    }
}

/// First row to show so the selected item (of `item_rows` rows, starting at
/// `selected_row`) stays inside a viewport of `height` rows.
fn list_offset(selected_row: usize, item_rows: usize, height: usize) -> usize {
    (selected_row + item_rows).saturating_sub(height)
}

impl Widget for LearningPanel<'_> {
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

        let selected = |is_selected: bool| {
            let style = Style::default().fg(if is_selected {
                colors.accent()
            } else {
                colors.fg()
            });
            if is_selected {
                style.bg(colors.selection_bg()).add_modifier(Modifier::BOLD)
            } else {
                style
            }
        };
        let dim = Style::default().fg(colors.text_dim());

        let body = match self.view.header() {
            Some((back_label, title)) => {
                let (header, body) = split_header(inner);
                render_header(back_label, title, self.theme, header, buf);
                body
            }
            None => inner,
        };

        match self.view {
            LearningView::Categories { cards } => {
                let mut lines = Vec::new();
                let mut selected_row = 0;
                for card in cards {
                    if card.selected {
                        selected_row = lines.len();
                    }
                    let indicator = if card.selected { ">" } else { " " };
                    lines.push(Line::from(Span::styled(
                        format!(" {indicator} {}", card.title),
                        selected(card.selected),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("     {}", card.count_label),
                        dim,
                    )));
                    lines.push(Line::from(""));
                }
                let offset = list_offset(selected_row, 2, body.height as usize);
                Paragraph::new(lines)
                    .scroll((offset as u16, 0))
                    .render(body, buf);
            }
            LearningView::Topics { rows, .. } => {
                let mut lines = Vec::new();
                let mut selected_row = 0;
                for row in rows {
                    if row.selected {
                        selected_row = lines.len();
                    }
                    let indicator = if row.selected { ">" } else { " " };
                    lines.push(Line::from(Span::styled(
                        format!(" {indicator} {}", row.title),
                        selected(row.selected),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("     {}", row.description),
                        dim,
                    )));
                    lines.push(Line::from(""));
                }
                let offset = list_offset(selected_row, 2, body.height as usize);
                Paragraph::new(lines)
                    .scroll((offset as u16, 0))
                    .render(body, buf);
            }
            LearningView::Detail { blocks, scroll, .. } => {
                Paragraph::new(block_lines(blocks, colors))
                    .wrap(Wrap { trim: false })
                    .scroll((*scroll, 0))
                    .render(body, buf);
            }
        }
    }
}

fn split_header(inner: Rect) -> (Rect, Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_ROWS), Constraint::Min(0)])
        .split(inner);
    (layout[0], layout[1])
}

fn render_header(back_label: &str, title: &str, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let colors = &theme.colors;
    let lines = vec![
        Line::from(vec![
            Span::styled("← ", Style::default().fg(colors.accent())),
            Span::styled(back_label, Style::default().fg(colors.text_dim())),
            Span::styled("  [Esc]", Style::default().fg(colors.accent_dim())),
        ]),
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(colors.heading())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    Paragraph::new(lines).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::learning::view::{CategoryCard, TopicRow};

    fn rows(view: &LearningView) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        LearningPanel::new(view, "Learning Notes", true, &theme).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn category_list_shows_title_only_in_border() {
        let view = LearningView::Categories {
            cards: vec![CategoryCard {
                title: "Database",
                topic_count: 4,
                count_label: "4 Topics".to_string(),
                selected: true,
            }],
        };
        let rows = rows(&view);
        assert!(rows[0].contains("Learning Notes"));
        assert_eq!(rows.iter().filter(|r| r.contains("Learning Notes")).count(), 1);
        assert!(rows[1].contains("> Database"));
        assert!(!rows.iter().any(|r| r.contains("[Esc]")));
    }

    #[test]
    fn topic_list_draws_back_header_above_rows() {
        let view = LearningView::Topics {
            back_label: "Back".to_string(),
            heading: "Database",
            rows: vec![TopicRow {
                title: "Transactions",
                description: "ACID",
                selected: true,
            }],
        };
        let rows = rows(&view);
        assert!(rows[1].contains("Back") && rows[1].contains("[Esc]"));
        assert!(rows[2].contains("Database"));
        assert!(rows[4].contains("> Transactions"));
    }

    #[test]
    fn list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(0, 2, 10), 0);
        assert_eq!(list_offset(8, 2, 10), 0);
        assert_eq!(list_offset(9, 2, 10), 1);
        assert_eq!(list_offset(20, 2, 10), 12);
    }
}
