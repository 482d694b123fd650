//! Default renderer backed by `pulldown-cmark`.

use std::fmt::Write;

use pulldown_cmark::{CowStr, Event, LinkType, Parser, Tag, TagEnd, html};

use crate::options::RendererOptions;
use crate::util::{Slugger, mangle_email};
use crate::MarkdownRenderer;

/// CommonMark renderer built on `pulldown-cmark`'s HTML writer.
///
/// Parser extensions follow [`RendererOptions::parser_options`]. Heading ids
/// and e-mail mangling are applied as event rewrites before the HTML writer
/// runs, so the rest of the output is exactly what `pulldown-cmark` produces.
#[derive(Clone, Copy, Debug, Default)]
pub struct PulldownRenderer;

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str, options: &RendererOptions) -> String {
        let parser = Parser::new_ext(markdown, options.parser_options());
        let mut events: Vec<Event<'_>> = parser.collect();

        if options.heading_ids {
            assign_heading_ids(&mut events);
        }
        if options.mangle {
            events = mangle_email_links(events);
        }

        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());
        output
    }
}

/// Give every heading without an explicit id a slug of its plain text.
fn assign_heading_ids(events: &mut [Event<'_>]) {
    let mut slugger = Slugger::default();
    // Index of the open heading's start event and its collected text.
    let mut open: Option<(usize, String)> = None;

    for index in 0..events.len() {
        match &events[index] {
            Event::Start(Tag::Heading { .. }) => open = Some((index, String::new())),
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buffer)) = open.as_mut() {
                    buffer.push_str(text);
                }
            }
            _ => {}
        }

        if !matches!(events[index], Event::End(TagEnd::Heading(_))) {
            continue;
        }
        if let Some((start, text)) = open.take() {
            let slug = slugger.slug(&text);
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[start]
                && id.is_none()
            {
                *id = Some(CowStr::from(slug));
            }
        }
    }
}

/// Replace e-mail autolinks with raw anchors whose address is entity-encoded.
///
/// The HTML writer escapes `&` in hrefs, so the anchor is emitted as inline
/// HTML instead of a link tag.
fn mangle_email_links(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut in_email = false;

    for event in events {
        match event {
            Event::Start(Tag::Link {
                link_type: LinkType::Email,
                dest_url,
                title,
                ..
            }) => {
                let mut anchor = format!(r#"<a href="mailto:{}""#, mangle_email(&dest_url));
                if !title.is_empty() {
                    write!(anchor, r#" title="{title}""#).unwrap();
                }
                anchor.push('>');
                out.push(Event::InlineHtml(anchor.into()));
                in_email = true;
            }
            Event::Text(text) if in_email => {
                out.push(Event::InlineHtml(mangle_email(&text).into()));
            }
            Event::End(TagEnd::Link) if in_email => {
                out.push(Event::InlineHtml("</a>".into()));
                in_email = false;
            }
            other => out.push(other),
        }
    }

    out
}
