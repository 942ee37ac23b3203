use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥70 cols: sidebar + main panel
    Narrow, // <70 cols: main panel only, section name in the panel title
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 70 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, sidebar_width: u16) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(2)])
            .split(area);

        if tier.show_sidebar() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
                .split(vertical[0]);

            Self {
                sidebar: Some(horizontal[0]),
                main: horizontal[1],
                footer: vertical[1],
            }
        } else {
            Self {
                sidebar: None,
                main: vertical[0],
                footer: vertical[1],
            }
        }
    }
}

/// Rows `lines` occupy when drawn as a `Paragraph` with `Wrap { trim: false }`
/// into `width` columns. Uses ratatui's own word wrapping, so it agrees with
/// what the panels draw.
pub fn wrapped_height(lines: &[Line], width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Largest useful scroll offset for content of `content_rows` in a viewport
/// of `viewport_rows`.
pub fn max_scroll(content_rows: usize, viewport_rows: u16) -> u16 {
    content_rows
        .saturating_sub(viewport_rows as usize)
        .min(u16::MAX as usize) as u16
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 36;
    const MIN_POPUP_HEIGHT: u16 = 8;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::widgets::Widget;

    #[test]
    fn sidebar_only_on_wide_terminals() {
        let wide = AppLayout::new(Rect::new(0, 0, 100, 30), 28);
        assert_eq!(wide.sidebar.map(|r| r.width), Some(28));
        assert_eq!(wide.main.width, 72);

        let narrow = AppLayout::new(Rect::new(0, 0, 60, 30), 28);
        assert!(narrow.sidebar.is_none());
        assert_eq!(narrow.main.width, 60);
        assert_eq!(narrow.footer.height, 2);
    }

    /// Rows actually painted by a wrapped paragraph, up to the last non-blank one.
    fn rendered_rows(lines: &[Line], width: u16) -> usize {
        let area = Rect::new(0, 0, width, 30);
        let mut buf = Buffer::empty(area);
        Paragraph::new(lines.to_vec())
            .wrap(Wrap { trim: false })
            .render(area, &mut buf);
        (0..area.height)
            .filter(|&y| (0..width).any(|x| buf[(x, y)].symbol() != " "))
            .map(|y| y as usize + 1)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn wrapped_height_follows_word_wrapping() {
        let lines = vec![Line::from("aaaaa bbbbb ccccc ddddd eeeee")];
        assert_eq!(rendered_rows(&lines, 10), 5);
        assert_eq!(wrapped_height(&lines, 10), rendered_rows(&lines, 10));
    }

    #[test]
    fn wrapped_height_matches_rendered_note() {
        let lines = vec![
            Line::from("Isolation levels trade consistency for throughput"),
            Line::from(""),
            Line::from("  • READ COMMITTED avoids dirty reads only"),
            Line::from("트랜잭션 격리 수준은 일관성과 처리량을 맞바꾼다"),
        ];
        for width in [12, 17, 25] {
            assert_eq!(
                wrapped_height(&lines, width),
                rendered_rows(&lines, width),
                "width {width}"
            );
        }
    }

    #[test]
    fn wrapped_height_counts_wide_glyphs() {
        let lines = vec![Line::from("abcd"), Line::from(""), Line::from("한국")];
        assert_eq!(wrapped_height(&lines, 2), 2 + 1 + 2);
        assert_eq!(wrapped_height(&lines, 0), 0);
    }

    #[test]
    fn max_scroll_never_negative() {
        assert_eq!(max_scroll(5, 10), 0);
        assert_eq!(max_scroll(25, 10), 15);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 30, 6);
        let rect = centered_rect(50, 50, area);
        assert!(rect.width <= area.width && rect.height <= area.height);
    }
}
