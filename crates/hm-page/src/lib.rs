//! Title resolution and HTML page assembly for hyper-marked.
//!
//! Two pieces compose linearly:
//!
//! - [`resolve_title`] / [`try_extract_title`]: pick the page title from an
//!   explicit value, the first level-1 heading, or [`DEFAULT_TITLE`]
//! - [`PageAssembler`]: render the body through a
//!   [`MarkdownRenderer`](hm_renderer::MarkdownRenderer) and stitch the
//!   full document together with styles and injected fragments
//!
//! Everything here is a pure function of its inputs. Titles, stylesheets
//! and injected fragments are inserted without escaping.
//!
//! # Example
//!
//! ```
//! use hm_page::{PageOptions, assemble_page};
//!
//! let options = PageOptions::default()
//!     .with_css("body { color: red; }")
//!     .with_before_body_end("<script src=\"app.js\"></script>");
//! let html = assemble_page("# Release notes\n\nAll fixed.", &options);
//!
//! assert!(html.contains("<title>Release notes</title>"));
//! assert!(html.contains("body { color: red; }"));
//! assert!(html.contains("<script src=\"app.js\"></script>\n</body>"));
//! ```

mod error;
mod page;
mod styles;
mod title;

pub use error::PageError;
pub use hm_renderer::{MarkdownRenderer, PulldownRenderer, RendererOptions};
pub use page::{PageAssembler, PageOptions, assemble_page, assemble_page_from_bytes};
pub use styles::{DEFAULT_STYLES, compose_styles};
pub use title::{DEFAULT_TITLE, resolve_title, try_extract_title};
