//! Shared helpers for heading ids and e-mail mangling.

use std::collections::HashMap;
use std::fmt::Write;

/// Generates unique heading ids for a single document.
///
/// Slugs are lowercased, punctuation is dropped and whitespace becomes `-`.
/// Repeated slugs get a numeric suffix: `faq`, `faq-1`, `faq-2`.
///
/// # Examples
///
/// ```
/// use hm_renderer::Slugger;
///
/// let mut slugger = Slugger::default();
/// assert_eq!(slugger.slug("Hello, World!"), "hello-world");
/// assert_eq!(slugger.slug("Hello World"), "hello-world-1");
/// ```
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Produce the next unique slug for `text`.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let Some(&count) = self.seen.get(&base) else {
            self.seen.insert(base.clone(), 0);
            return base;
        };

        let mut count = count;
        let candidate = loop {
            count += 1;
            let candidate = format!("{base}-{count}");
            if !self.seen.contains_key(&candidate) {
                break candidate;
            }
        };
        self.seen.insert(base, count);
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

/// Convert heading text to its base slug (no uniqueness suffix).
fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|&c| !is_slug_punctuation(c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_slug_punctuation(c: char) -> bool {
    // `-` and `_` survive; general and supplemental punctuation blocks do not.
    (c.is_ascii_punctuation() && c != '-' && c != '_')
        || ('\u{2000}'..='\u{206F}').contains(&c)
        || ('\u{2E00}'..='\u{2E7F}').contains(&c)
}

/// Encode every character of an e-mail address as a decimal character reference.
///
/// # Examples
///
/// ```
/// use hm_renderer::mangle_email;
///
/// assert_eq!(mangle_email("a@b"), "&#97;&#64;&#98;");
/// ```
#[must_use]
pub fn mangle_email(address: &str) -> String {
    let mut out = String::with_capacity(address.len() * 6);
    for c in address.chars() {
        write!(out, "&#{};", u32::from(c)).unwrap();
    }
    out
}
