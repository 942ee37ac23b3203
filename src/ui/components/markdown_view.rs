use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio::learning::markdown::{Block, Inline};

use crate::ui::theme::ThemeColors;

fn inline_spans(inlines: &[Inline], base: Style, colors: &ThemeColors) -> Vec<Span<'static>> {
    inlines
        .iter()
        .map(|inline| {
            let style = match inline {
                Inline::Text(_) => base,
                Inline::Strong(_) => base.fg(colors.strong()).add_modifier(Modifier::BOLD),
            };
            Span::styled(inline.as_str().to_string(), style)
        })
        .collect()
}

/// Styled terminal lines for a parsed note, one per source line.
pub fn block_lines(blocks: &[Block], colors: &ThemeColors) -> Vec<Line<'static>> {
    let text = Style::default().fg(colors.fg());
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, inlines } => {
                let mut style = text.fg(colors.heading()).add_modifier(Modifier::BOLD);
                if *level == 3 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                lines.push(Line::from(inline_spans(inlines, style, colors)));
            }
            Block::ListItem(inlines) => {
                let mut spans = vec![Span::styled("  • ", Style::default().fg(colors.accent()))];
                spans.extend(inline_spans(inlines, text, colors));
                lines.push(Line::from(spans));
            }
            Block::Text(inlines) => lines.push(Line::from(inline_spans(inlines, text, colors))),
            Block::Blank => lines.push(Line::from("")),
            Block::Code { lang, body } => {
                let code = Style::default().fg(colors.code_fg()).bg(colors.code_bg());
                let label = lang.as_deref().unwrap_or("code");
                lines.push(Line::from(Span::styled(
                    format!(" {label} "),
                    Style::default()
                        .fg(colors.text_dim())
                        .add_modifier(Modifier::ITALIC),
                )));
                for code_line in body.strip_suffix('\n').unwrap_or(body).split('\n') {
                    lines.push(Line::from(Span::styled(format!(" {code_line}"), code)));
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::learning::markdown::parse;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn one_line_per_source_line_plus_code_label() {
        let blocks = parse("### T\n- **a** b\n\n```sql\nSELECT 1;\nSELECT 2;\n```");
        let lines = block_lines(&blocks, &ThemeColors::default());
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(
            text,
            vec!["T", "  • a b", "", " sql ", " SELECT 1;", " SELECT 2;"]
        );
    }

    #[test]
    fn strong_spans_are_bold() {
        let blocks = parse("x **y**");
        let lines = block_lines(&blocks, &ThemeColors::default());
        let bold = &lines[0].spans[1];
        assert_eq!(bold.content, "y");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }
}
