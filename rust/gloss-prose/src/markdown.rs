//! Markdown-to-prose rendering.
//!
//! The renderer walks markup and produces two things at once:
//!
//! - a normalized `markdown` string (soft line breaks become spaces,
//!   paragraphs are separated by blank lines, inline code keeps its
//!   backticks) used for display and sentence splitting;
//! - an ordered stream of [`Span`]s: the raw text runs and the inline-code
//!   spans, in document order. Downstream code decides what a code span
//!   means (a cross-reference, usually) — the renderer only reports it.
//!
//! Block-level handling is deliberately shallow: heading and list markers
//! are kept in the rendered string but excluded from text spans, and fenced
//! code blocks are excluded from text spans entirely. Emphasis markers
//! (`*`) are kept in the rendered string and dropped from text spans.

/// One inline piece of a rendered document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// A run of plain prose text.
    Text(String),
    /// The content of an inline code span (backticks stripped).
    Code(String),
}

/// The result of rendering a markdown description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The normalized markdown string.
    pub markdown: String,
    /// Text and code spans in document order.
    pub spans: Vec<Span>,
}

/// Render `markup`, producing the normalized string and the span stream.
pub fn render(markup: &str) -> Rendered {
    let mut out = String::new();
    let mut spans = Vec::new();
    let mut text_buf = String::new();
    let mut in_fence = false;
    let mut para_open = false;

    for line in markup.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            flush_text(&mut text_buf, &mut spans);
            if !out.is_empty() {
                out.push_str(if in_fence { "\n" } else { "\n\n" });
            }
            out.push_str(line);
            in_fence = !in_fence;
            para_open = false;
            continue;
        }
        if in_fence {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(line);
            continue;
        }
        if trimmed.is_empty() {
            flush_text(&mut text_buf, &mut spans);
            para_open = false;
            continue;
        }

        if para_open {
            // Soft line break inside a paragraph.
            out.push(' ');
            text_buf.push(' ');
        } else if !out.is_empty() {
            out.push_str("\n\n");
        }
        render_line(trimmed, &mut out, &mut text_buf, &mut spans);
        para_open = true;
    }

    flush_text(&mut text_buf, &mut spans);
    Rendered {
        markdown: out,
        spans,
    }
}

fn flush_text(text_buf: &mut String, spans: &mut Vec<Span>) {
    if !text_buf.is_empty() {
        spans.push(Span::Text(std::mem::take(text_buf)));
    }
}

/// Inline-render one line: markers and emphasis stay in `out` only, code
/// spans split the text stream, link text flows into both.
fn render_line(line: &str, out: &mut String, text_buf: &mut String, spans: &mut Vec<Span>) {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut i = 0;

    // Heading marker: kept in the rendered string, excluded from prose.
    if chars[0] == '#' {
        let mut level = 0;
        while level < len && chars[level] == '#' {
            level += 1;
        }
        if level <= 6 && level < len && chars[level] == ' ' {
            out.extend(&chars[..level + 1]);
            i = level + 1;
        }
    }
    // List item marker, same treatment.
    if i == 0 && len >= 2 && matches!(chars[0], '-' | '*' | '+') && chars[1] == ' ' {
        out.push(chars[0]);
        out.push(' ');
        i = 2;
    }

    while i < len {
        let ch = chars[i];

        // Inline code span: a backtick run closed by a run of equal length.
        if ch == '`' {
            let mut open = i;
            while open < len && chars[open] == '`' {
                open += 1;
            }
            let fence = open - i;
            if let Some(close) = find_backtick_run(&chars, open, fence) {
                flush_text(text_buf, spans);
                let code: String = chars[open..close].iter().collect();
                spans.push(Span::Code(trim_code_pad(&code)));
                out.extend(&chars[i..close + fence]);
                i = close + fence;
                continue;
            }
            // No closing run; the backticks are literal text.
            out.push(ch);
            text_buf.push(ch);
            i += 1;
            continue;
        }

        // Image: rendered verbatim, contributes no prose.
        if ch == '!' && i + 1 < len && chars[i + 1] == '[' {
            if let Some((_, end)) = parse_link(&chars, i + 1) {
                out.extend(&chars[i..end]);
                i = end;
                continue;
            }
        }

        // Link: the label text flows into prose, the whole thing is rendered.
        if ch == '[' {
            if let Some((label, end)) = parse_link(&chars, i) {
                out.extend(&chars[i..end]);
                text_buf.push_str(&label);
                i = end;
                continue;
            }
        }

        // Emphasis marker: display only.
        if ch == '*' {
            out.push(ch);
            i += 1;
            continue;
        }

        out.push(ch);
        text_buf.push(ch);
        i += 1;
    }
}

/// Find the start of the next backtick run of exactly `fence` backticks at
/// or after `from`. Returns the index of the run's first backtick.
fn find_backtick_run(chars: &[char], from: usize, fence: usize) -> Option<usize> {
    let len = chars.len();
    let mut i = from;
    while i < len {
        if chars[i] == '`' {
            let start = i;
            while i < len && chars[i] == '`' {
                i += 1;
            }
            if i - start == fence {
                return Some(start);
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Strip the single padding space a code span may carry on both sides,
/// as in `` ` code ` ``.
fn trim_code_pad(code: &str) -> String {
    let stripped = code
        .strip_prefix(' ')
        .and_then(|s| s.strip_suffix(' '))
        .unwrap_or(code);
    if stripped.trim().is_empty() {
        code.to_string()
    } else {
        stripped.to_string()
    }
}

/// Parse `[label](target)` starting at the `[` in `chars[open]`.
/// Returns the label and the index one past the closing `)`.
fn parse_link(chars: &[char], open: usize) -> Option<(String, usize)> {
    let len = chars.len();
    let mut i = open + 1;
    while i < len && chars[i] != ']' && chars[i] != '[' {
        i += 1;
    }
    if i >= len || chars[i] != ']' || i + 1 >= len || chars[i + 1] != '(' {
        return None;
    }
    let label: String = chars[open + 1..i].iter().collect();
    let mut j = i + 2;
    while j < len && chars[j] != ')' {
        j += 1;
    }
    if j >= len {
        return None;
    }
    Some((label, j + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_one_span() {
        let rendered = render("Opens a door.");
        assert_eq!(rendered.markdown, "Opens a door.");
        assert_eq!(rendered.spans, vec![Span::Text("Opens a door.".into())]);
    }

    #[test]
    fn code_span_splits_text() {
        let rendered = render("See `key` for more.");
        assert_eq!(rendered.markdown, "See `key` for more.");
        assert_eq!(
            rendered.spans,
            vec![
                Span::Text("See ".into()),
                Span::Code("key".into()),
                Span::Text(" for more.".into()),
            ]
        );
    }

    #[test]
    fn double_backtick_code_span() {
        let rendered = render("Use `` a`b `` here.");
        assert_eq!(
            rendered.spans,
            vec![
                Span::Text("Use ".into()),
                Span::Code("a`b".into()),
                Span::Text(" here.".into()),
            ]
        );
    }

    #[test]
    fn softbreak_becomes_space() {
        let rendered = render("one\ntwo");
        assert_eq!(rendered.markdown, "one two");
        assert_eq!(rendered.spans, vec![Span::Text("one two".into())]);
    }

    #[test]
    fn paragraphs_split_spans() {
        let rendered = render("one\n\ntwo");
        assert_eq!(rendered.markdown, "one\n\ntwo");
        assert_eq!(
            rendered.spans,
            vec![Span::Text("one".into()), Span::Text("two".into())]
        );
    }

    #[test]
    fn heading_marker_excluded_from_prose() {
        let rendered = render("# Title\n\nBody.");
        assert_eq!(rendered.markdown, "# Title\n\nBody.");
        assert_eq!(
            rendered.spans,
            vec![Span::Text("Title".into()), Span::Text("Body.".into())]
        );
    }

    #[test]
    fn fenced_code_contributes_no_prose() {
        let rendered = render("Before.\n\n```\nlet x = 1\n```\n\nAfter.");
        assert_eq!(
            rendered.spans,
            vec![Span::Text("Before.".into()), Span::Text("After.".into())]
        );
        assert!(rendered.markdown.contains("let x = 1"));
    }

    #[test]
    fn link_label_flows_into_prose() {
        let rendered = render("See [the docs](https://example.com) now.");
        assert_eq!(
            rendered.spans,
            vec![Span::Text("See the docs now.".into())]
        );
        assert_eq!(rendered.markdown, "See [the docs](https://example.com) now.");
    }

    #[test]
    fn emphasis_markers_dropped_from_prose() {
        let rendered = render("a *very* big deal");
        assert_eq!(rendered.markdown, "a *very* big deal");
        assert_eq!(rendered.spans, vec![Span::Text("a very big deal".into())]);
    }

    #[test]
    fn unclosed_backtick_is_literal() {
        let rendered = render("a ` b");
        assert_eq!(rendered.spans, vec![Span::Text("a ` b".into())]);
    }

    #[test]
    fn empty_input() {
        let rendered = render("");
        assert_eq!(rendered.markdown, "");
        assert!(rendered.spans.is_empty());
    }
}
