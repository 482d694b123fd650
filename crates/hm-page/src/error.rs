//! Page assembly errors.

use std::str::Utf8Error;

/// Error returned when a page cannot be assembled.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The markdown input is not text.
    #[error("Markdown content must be valid UTF-8 text")]
    InvalidInput(#[source] Utf8Error),
}
