//! Markdown to HTML via comrak, sanitised with ammonia.

use ammonia::Builder as AmmoniaBuilder;
use comrak::{Options, markdown_to_html};

use quill_core::ports::ContentRenderer;

/// GitHub-flavoured markdown renderer.
///
/// Raw HTML in the source is dropped by comrak and anything that slips
/// through is stripped by the sanitiser, so the output is safe to embed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options<'static> {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options
    }

    fn sanitizer() -> AmmoniaBuilder<'static> {
        let mut builder = AmmoniaBuilder::default();
        builder
            .add_tags(&["input"])
            .add_tag_attributes("input", &["type", "checked", "disabled"]);
        builder
    }
}

impl ContentRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> String {
        let html = markdown_to_html(source, &Self::options());
        Self::sanitizer().clean(&html).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        MarkdownRenderer::new().render(source)
    }

    #[test]
    fn test_headings_and_emphasis() {
        let html = render("# Title\n\nSome **bold** and _italic_ text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_removed() {
        let html = render("hello\n\n<script>alert(1)</script>\n\n<img src=x onerror=alert(1)>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("onerror"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_javascript_links_are_stripped() {
        let html = render("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(render(""), "");
    }
}
