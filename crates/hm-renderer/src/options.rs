//! Renderer configuration passed through by the page assembler.

use pulldown_cmark::Options;

/// Options forwarded verbatim to the renderer.
///
/// The defaults are the ones the page assembler fixes: heading ids and
/// e-mail mangling are off, GitHub Flavored Markdown is on. Callers
/// override individual fields; with the `serde` feature a partial table
/// keeps the defaults for every key it omits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererOptions {
    /// Emit `id` attributes on headings, derived from the heading text.
    pub heading_ids: bool,
    /// Obfuscate autolinked e-mail addresses as numeric character references.
    pub mangle: bool,
    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists,
    /// blockquote tags).
    pub gfm: bool,
    /// Convert straight quotes, `--`, `---` and `...` to typographic forms.
    pub smart_punctuation: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            heading_ids: false,
            mangle: false,
            gfm: true,
            smart_punctuation: false,
        }
    }
}

impl RendererOptions {
    /// Enable or disable heading ids.
    #[must_use]
    pub fn with_heading_ids(mut self, enabled: bool) -> Self {
        self.heading_ids = enabled;
        self
    }

    /// Enable or disable e-mail mangling.
    #[must_use]
    pub fn with_mangle(mut self, enabled: bool) -> Self {
        self.mangle = enabled;
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable smart punctuation.
    #[must_use]
    pub fn with_smart_punctuation(mut self, enabled: bool) -> Self {
        self.smart_punctuation = enabled;
        self
    }

    /// Parser options derived from this configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM;
        }
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        options
    }
}
