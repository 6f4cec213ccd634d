//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

/// Renders Markdown to an HTML fragment.
///
/// Tables and strikethrough are enabled. The output is whatever the
/// Markdown transform produces; it is not sanitized further, so raw
/// HTML in note content passes through to the rendered page.
pub fn render_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options);
    let mut out = String::with_capacity(content.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = render_html("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_renders_tables() {
        let html = render_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_renders_code_blocks() {
        let html = render_html("```\nlet x = 1;\n```");
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(render_html(""), "");
    }
}
