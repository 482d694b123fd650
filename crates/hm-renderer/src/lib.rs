//! Markdown-to-HTML body rendering for hyper-marked.
//!
//! The page assembler treats the renderer as an external collaborator: it
//! hands over markdown text plus an opaque [`RendererOptions`] value and
//! embeds whatever HTML fragment comes back.
//!
//! # Architecture
//!
//! - [`MarkdownRenderer`]: the seam between page assembly and rendering
//! - [`PulldownRenderer`]: the default implementation, backed by `pulldown-cmark`
//!
//! # Example
//!
//! ```
//! use hm_renderer::{MarkdownRenderer, PulldownRenderer, RendererOptions};
//!
//! let html = PulldownRenderer.render("# Hello\n\n**Bold** text", &RendererOptions::default());
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>Bold</strong>"));
//! ```

mod options;
mod pulldown;
mod util;

pub use options::RendererOptions;
pub use pulldown::PulldownRenderer;
pub use util::{Slugger, mangle_email};

/// Converts markdown text into an HTML fragment.
///
/// Implementations must be deterministic and free of side effects. The
/// returned fragment is embedded verbatim, so it is trusted markup.
pub trait MarkdownRenderer {
    /// Render `markdown` to an HTML fragment using `options`.
    fn render(&self, markdown: &str, options: &RendererOptions) -> String;
}

impl<R: MarkdownRenderer + ?Sized> MarkdownRenderer for &R {
    fn render(&self, markdown: &str, options: &RendererOptions) -> String {
        (**self).render(markdown, options)
    }
}

impl<R: MarkdownRenderer + ?Sized> MarkdownRenderer for Box<R> {
    fn render(&self, markdown: &str, options: &RendererOptions) -> String {
        (**self).render(markdown, options)
    }
}
