//! Complete HTML page assembly.

use std::fmt::Write;

use hm_renderer::{MarkdownRenderer, PulldownRenderer, RendererOptions};

use crate::error::PageError;
use crate::styles::compose_styles;
use crate::title::resolve_title;

/// Options controlling the assembled page.
///
/// `None` means "not given". Empty strings are treated like `None` for the
/// stylesheet and injected fragments, and fall through to extraction for
/// the title.
#[derive(Clone, Debug, Default)]
pub struct PageOptions {
    /// Page title; overrides the extracted heading when non-empty.
    pub title: Option<String>,
    /// Custom CSS appended after the default stylesheet.
    pub css: Option<String>,
    /// Drop the built-in stylesheet.
    pub no_default_styles: bool,
    /// Raw markup inserted right before `</head>`.
    pub before_head_end: Option<String>,
    /// Raw markup inserted right after `<body>`.
    pub after_body_start: Option<String>,
    /// Raw markup inserted right before `</body>`.
    pub before_body_end: Option<String>,
    /// Options passed through to the markdown renderer.
    pub renderer: RendererOptions,
}

impl PageOptions {
    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set custom CSS.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Disable or enable the built-in stylesheet.
    #[must_use]
    pub fn with_no_default_styles(mut self, disabled: bool) -> Self {
        self.no_default_styles = disabled;
        self
    }

    /// Set markup injected before `</head>`.
    #[must_use]
    pub fn with_before_head_end(mut self, html: impl Into<String>) -> Self {
        self.before_head_end = Some(html.into());
        self
    }

    /// Set markup injected after `<body>`.
    #[must_use]
    pub fn with_after_body_start(mut self, html: impl Into<String>) -> Self {
        self.after_body_start = Some(html.into());
        self
    }

    /// Set markup injected before `</body>`.
    #[must_use]
    pub fn with_before_body_end(mut self, html: impl Into<String>) -> Self {
        self.before_body_end = Some(html.into());
        self
    }

    /// Set renderer options.
    #[must_use]
    pub fn with_renderer(mut self, renderer: RendererOptions) -> Self {
        self.renderer = renderer;
        self
    }
}

/// Builds complete HTML pages around a markdown renderer.
///
/// # Example
///
/// ```
/// use hm_page::{PageAssembler, PageOptions};
///
/// let assembler = PageAssembler::new();
/// let html = assembler.assemble("# Hello\n\nWorld", &PageOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<title>Hello</title>"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PageAssembler<R = PulldownRenderer> {
    renderer: R,
}

impl PageAssembler {
    /// Create an assembler using the default `pulldown-cmark` renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(PulldownRenderer)
    }
}

impl<R: MarkdownRenderer> PageAssembler<R> {
    /// Create an assembler using a custom renderer.
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Assemble a page from markdown text.
    pub fn assemble(&self, markdown: &str, options: &PageOptions) -> String {
        let title = resolve_title(markdown, options.title.as_deref());
        let body = self.renderer.render(markdown, &options.renderer);
        let styles = compose_styles(options.css.as_deref(), options.no_default_styles);

        tracing::debug!(
            title = %title,
            body_len = body.len(),
            styles_len = styles.len(),
            "Assembling page"
        );

        let mut html = String::with_capacity(body.len() + styles.len() + 512);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(html, "  <title>{title}</title>");
        if !styles.is_empty() {
            let _ = writeln!(html, "  <style>\n{styles}\n  </style>");
        }
        push_fragment(&mut html, options.before_head_end.as_deref());
        html.push_str("</head>\n<body>\n");
        push_fragment(&mut html, options.after_body_start.as_deref());

        html.push_str("<div class=\"markdown-content\">\n");
        html.push_str(&body);
        if !body.is_empty() && !body.ends_with('\n') {
            html.push('\n');
        }
        html.push_str("</div>\n");

        push_fragment(&mut html, options.before_body_end.as_deref());
        html.push_str("</body>\n</html>");
        html
    }

    /// Assemble a page from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidInput`] if `markdown` is not valid UTF-8.
    pub fn assemble_bytes(
        &self,
        markdown: &[u8],
        options: &PageOptions,
    ) -> Result<String, PageError> {
        let markdown = std::str::from_utf8(markdown).map_err(PageError::InvalidInput)?;
        Ok(self.assemble(markdown, options))
    }
}

/// Append a non-empty raw fragment on its own line.
fn push_fragment(html: &mut String, fragment: Option<&str>) {
    if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
        html.push_str(fragment);
        html.push('\n');
    }
}

/// Assemble a page with the default renderer.
///
/// # Examples
///
/// ```
/// use hm_page::{PageOptions, assemble_page};
///
/// let html = assemble_page("# Hello World\n\nThis is **bold** text.", &PageOptions::default());
/// assert!(html.contains("<title>Hello World</title>"));
/// assert!(html.contains("<strong>bold</strong>"));
/// ```
pub fn assemble_page(markdown: &str, options: &PageOptions) -> String {
    PageAssembler::new().assemble(markdown, options)
}

/// Assemble a page from raw bytes with the default renderer.
///
/// # Errors
///
/// Returns [`PageError::InvalidInput`] if `markdown` is not valid UTF-8.
pub fn assemble_page_from_bytes(
    markdown: &[u8],
    options: &PageOptions,
) -> Result<String, PageError> {
    PageAssembler::new().assemble_bytes(markdown, options)
}
