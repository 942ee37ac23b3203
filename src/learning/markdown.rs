//! Renderer for the markdown subset used by the learning notes.
//!
//! Supported, in precedence order: fenced code blocks, `#### ` and `### `
//! headings, `**bold**` spans, `- ` list items and blank-line paragraph
//! breaks. Everything else passes through untouched, including `<` and `&`;
//! notes are authored in-tree, so no escaping happens outside code blocks
//! either. List items are emitted as bare `<li>` elements with no enclosing
//! `<ul>`.
//!
//! Rendering goes through a line-level block list so the terminal view can
//! style the same structure the HTML is built from.

use std::sync::LazyLock;

use regex::Regex;

const FENCE: &str = "```";
const PARAGRAPH_BREAK: &str = "<br/><br/>";

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Fenced code. `body` is verbatim; the language tag never reaches HTML.
    Code { lang: Option<String>, body: String },
    Heading { level: u8, inlines: Vec<Inline> },
    ListItem(Vec<Inline>),
    Text(Vec<Inline>),
    Blank,
}

/// Render `content` straight to HTML.
pub fn render_html(content: &str) -> String {
    to_html(&parse(content))
}

/// Split `content` into one block per source line, except that a fenced code
/// region collapses into a single [`Block::Code`].
///
/// A fence that is never closed swallows the rest of the input as code.
pub fn parse(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut lines = content.split('\n');

    while let Some(line) = lines.next() {
        match line.strip_prefix(FENCE) {
            Some(tag) => blocks.push(parse_fence(tag, &mut lines)),
            None => blocks.push(parse_line(line)),
        }
    }

    blocks
}

fn parse_fence<'a>(tag: &str, lines: &mut impl Iterator<Item = &'a str>) -> Block {
    let tag = tag.trim();
    let lang = (!tag.is_empty()).then(|| tag.to_string());
    let mut inner: Vec<&str> = Vec::new();

    for line in lines.by_ref() {
        if line.trim_end() == FENCE {
            let mut body = String::new();
            for inner_line in &inner {
                body.push_str(inner_line);
                body.push('\n');
            }
            return Block::Code { lang, body };
        }
        inner.push(line);
    }

    Block::Code {
        lang,
        body: inner.join("\n"),
    }
}

fn parse_line(line: &str) -> Block {
    if line.is_empty() {
        Block::Blank
    } else if let Some(rest) = line.strip_prefix("#### ") {
        Block::Heading {
            level: 4,
            inlines: parse_inlines(rest),
        }
    } else if let Some(rest) = line.strip_prefix("### ") {
        Block::Heading {
            level: 3,
            inlines: parse_inlines(rest),
        }
    } else if let Some(rest) = line.strip_prefix("- ") {
        Block::ListItem(parse_inlines(rest))
    } else {
        Block::Text(parse_inlines(line))
    }
}

/// Split a single line into plain and strong spans.
///
/// Matching is leftmost and non-greedy. One pass is already a fixed point:
/// any `**` pair still present afterwards would have matched during the pass.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        spans.push(Inline::Strong(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Inline::Text(text[last..].to_string()));
    }

    spans
}

impl Inline {
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Strong(s) => s,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Inline::Text(s) => out.push_str(s),
            Inline::Strong(s) => {
                out.push_str("<strong>");
                out.push_str(s);
                out.push_str("</strong>");
            }
        }
    }
}

fn inlines_html(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.write_html(&mut out);
    }
    out
}

impl Block {
    /// HTML for this block alone. Blank lines produce nothing; the newline
    /// runs around them are handled by [`to_html`].
    pub fn to_html(&self) -> String {
        match self {
            Block::Code { body, .. } => format!("<pre><code>{body}</code></pre>"),
            Block::Heading { level, inlines } => {
                format!("<h{level}>{}</h{level}>", inlines_html(inlines))
            }
            Block::ListItem(inlines) => format!("<li>{}</li>", inlines_html(inlines)),
            Block::Text(inlines) => inlines_html(inlines),
            Block::Blank => String::new(),
        }
    }
}

/// Join blocks back into a document. Blocks are separated by the newline that
/// ended their source line; any run of two or more of those separators turns
/// into a paragraph break. Newlines inside code bodies are never counted.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut newlines = 0usize;

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            newlines += 1;
        }
        let piece = block.to_html();
        if piece.is_empty() {
            continue;
        }
        push_separator(&mut out, newlines);
        newlines = 0;
        out.push_str(&piece);
    }
    push_separator(&mut out, newlines);

    out
}

fn push_separator(out: &mut String, newlines: usize) {
    match newlines {
        0 => {}
        1 => out.push('\n'),
        _ => out.push_str(PARAGRAPH_BREAK),
    }
}
