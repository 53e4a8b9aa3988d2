//! Markup rendering for the terminal.
//!
//! The site stores post bodies as markdown (dynamic service) or serves
//! legacy markdown files; either way the overlay needs plain text a
//! ratatui paragraph can wrap. This keeps structure per line: headings
//! lose their markers, tags are stripped, entities are decoded.

use html_escape::decode_html_entities;

/// Convert a markdown/HTML body into plain text, one output line per
/// input line.
pub fn to_plain_text(markup: &str) -> String {
    let mut out = String::new();
    for line in markup.lines() {
        let line = strip_tags(line);
        let line = decode_html_entities(&line);
        let trimmed = line.trim_end();
        if let Some(rest) = trimmed.strip_prefix('#') {
            out.push_str(rest.trim_start_matches('#').trim_start());
        } else {
            out.push_str(trimmed);
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Derived excerpt: plain text, whitespace collapsed, truncated to
/// `max_chars` with an ellipsis.
pub fn excerpt(markup: &str, max_chars: usize) -> String {
    let text = to_plain_text(markup);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

fn strip_tags(line: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_heading_markers() {
        assert_eq!(to_plain_text("# Title\n\nBody"), "Title\n\nBody");
        assert_eq!(to_plain_text("### Deep"), "Deep");
    }

    #[test]
    fn test_strips_tags_and_decodes_entities() {
        assert_eq!(
            to_plain_text("<p>Fish &amp; chips</p>"),
            "Fish & chips"
        );
    }

    #[test]
    fn test_preserves_paragraph_breaks() {
        let text = to_plain_text("one\n\ntwo");
        assert_eq!(text, "one\n\ntwo");
    }

    #[test]
    fn test_excerpt_short_text_untouched() {
        assert_eq!(excerpt("hello world", 100), "hello world");
    }

    #[test]
    fn test_excerpt_truncates_with_ellipsis() {
        let long = "a".repeat(150);
        let e = excerpt(&long, 100);
        assert_eq!(e.chars().count(), 103);
        assert!(e.ends_with("..."));
    }

    #[test]
    fn test_excerpt_collapses_whitespace() {
        assert_eq!(excerpt("# Title\n\nand  body", 100), "Title and body");
    }

    #[test]
    fn test_excerpt_multibyte_safe() {
        let jp = "日本語の本文".repeat(30);
        let e = excerpt(&jp, 100);
        assert_eq!(e.chars().count(), 103);
    }
}
