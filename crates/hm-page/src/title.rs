//! Page title resolution.
//!
//! The title comes from, in order: an explicit non-empty title, the first
//! level-1 heading outside fenced code, or [`DEFAULT_TITLE`].

use std::borrow::Cow;

/// Title used when neither an explicit title nor a heading is available.
pub const DEFAULT_TITLE: &str = "Document";

/// Marker that opens and closes a fenced code region.
const FENCE: &str = "```";

/// Resolve the page title for `markdown`.
///
/// A present, non-empty `explicit_title` is returned verbatim (no trimming,
/// no escaping). Otherwise the first level-1 heading is used, falling back
/// to [`DEFAULT_TITLE`].
///
/// # Examples
///
/// ```
/// use hm_page::resolve_title;
///
/// assert_eq!(resolve_title("# Intro", Some("Custom")), "Custom");
/// assert_eq!(resolve_title("# Intro", None), "Intro");
/// assert_eq!(resolve_title("## Only H2", None), "Document");
/// ```
pub fn resolve_title(markdown: &str, explicit_title: Option<&str>) -> String {
    if let Some(title) = explicit_title.filter(|t| !t.is_empty()) {
        return title.to_owned();
    }
    try_extract_title(markdown).unwrap_or_else(|| DEFAULT_TITLE.to_owned())
}

/// Extract the first level-1 heading from `markdown`.
///
/// Fenced code regions are removed before scanning so headings inside code
/// samples never match. A heading line is a single `#`, at least one
/// whitespace character, then text; the text is trimmed and a heading whose
/// text trims to nothing is skipped. Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use hm_page::try_extract_title;
///
/// let markdown = "```\n# Fake header\n```\n\n# Real header";
/// assert_eq!(try_extract_title(markdown).as_deref(), Some("Real header"));
/// assert_eq!(try_extract_title("## H2 only"), None);
/// ```
pub fn try_extract_title(markdown: &str) -> Option<String> {
    if markdown.is_empty() {
        return None;
    }

    strip_code_fences(markdown)
        .lines()
        .find_map(heading_text)
        .map(str::to_owned)
}

/// Text of a level-1 heading line, trimmed; `None` for any other line.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    // `##` and `#Title` both fail here: the marker must be followed by whitespace.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    // A bare carriage return ends the heading line, so the text cannot span it.
    (!text.is_empty() && !text.contains('\r')).then_some(text)
}

/// Remove every region from one triple backtick to the next.
///
/// Regions may span lines and the match is non-greedy. An opening marker
/// without a closing one is left in place together with the text after it.
fn strip_code_fences(markdown: &str) -> Cow<'_, str> {
    let Some(first) = markdown.find(FENCE) else {
        return Cow::Borrowed(markdown);
    };

    let mut out = String::with_capacity(markdown.len());
    let mut cursor = 0;
    let mut open = Some(first);

    while let Some(start) = open {
        let body = start + FENCE.len();
        let Some(close) = markdown[body..].find(FENCE) else {
            break;
        };
        out.push_str(&markdown[cursor..start]);
        cursor = body + close + FENCE.len();
        open = markdown[cursor..].find(FENCE).map(|next| cursor + next);
    }

    out.push_str(&markdown[cursor..]);
    Cow::Owned(out)
}
