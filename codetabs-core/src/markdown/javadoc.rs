//! `javadoc:` links to the hosted API documentation.
//!
//! `[AutoParams](javadoc:11.1.0/autoparams/AutoParams.html)` points at
//! `<base_url>/11.1.0/autoparams/AutoParams.html` and opens in a new tab.

use crate::render::html_escape;
use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

const SCHEME: &str = "javadoc:";

pub struct JavadocTransformer {
    base_url: String,
}

impl JavadocTransformer {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for a `<version>/<path>` reference.
    pub fn url(&self, reference: &str) -> String {
        format!("{}/{}", self.base_url, reference.trim_start_matches('/'))
    }

    pub fn transform(&self, events: Vec<Event<'static>>) -> Vec<Event<'static>> {
        let mut result = Vec::with_capacity(events.len());
        let mut in_javadoc_link = false;

        for event in events {
            match event {
                Event::Start(Tag::Link {
                    ref dest_url,
                    ref title,
                    ..
                }) if dest_url.starts_with(SCHEME) => {
                    let href = self.url(&dest_url[SCHEME.len()..]);
                    let mut anchor = format!(r#"<a href="{}""#, html_escape(&href));
                    if !title.is_empty() {
                        anchor.push_str(&format!(r#" title="{}""#, html_escape(title)));
                    }
                    anchor.push_str(r#" target="_blank" rel="noopener noreferrer">"#);
                    result.push(Event::InlineHtml(CowStr::Boxed(anchor.into_boxed_str())));
                    in_javadoc_link = true;
                }
                Event::End(TagEnd::Link) if in_javadoc_link => {
                    result.push(Event::InlineHtml(CowStr::Borrowed("</a>")));
                    in_javadoc_link = false;
                }
                other => result.push(other),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html, Parser};

    const BASE: &str = "https://www.javadoc.io/static/io.github.autoparams/autoparams";

    fn render(markdown: &str) -> String {
        let events = Parser::new(markdown).map(Event::into_static).collect();
        let events = JavadocTransformer::new(BASE).transform(events);
        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }

    #[test]
    fn test_javadoc_link() {
        let html = render("See [AutoParams](javadoc:11.1.0/autoparams/AutoParams.html).");

        assert!(html.contains(
            r#"<a href="https://www.javadoc.io/static/io.github.autoparams/autoparams/11.1.0/autoparams/AutoParams.html" target="_blank" rel="noopener noreferrer">AutoParams</a>"#
        ));
    }

    #[test]
    fn test_regular_links_untouched() {
        let html = render("[docs](https://example.com) and [API](javadoc:1.0/a.html)");

        assert!(html.contains(r#"<a href="https://example.com">docs</a>"#));
        assert!(html.contains(r#"/1.0/a.html" target="_blank""#));
        assert_eq!(html.matches("</a>").count(), 2);
    }

    #[test]
    fn test_link_title_kept() {
        let html = render(r#"[API](javadoc:1.0/a.html "Generated API")"#);
        assert!(html.contains(r#"title="Generated API""#));
    }

    #[test]
    fn test_url_joining() {
        let transformer = JavadocTransformer::new("https://docs.example.com/api/");
        assert_eq!(transformer.url("/2.0/x.html"), "https://docs.example.com/api/2.0/x.html");
    }
}
