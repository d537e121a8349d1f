//! Content nodes and the language classifier.

use regex::Regex;
use std::sync::OnceLock;

/// A rendered unit handed over by the content pipeline.
///
/// The tag is a class-like marker string (possibly a whitespace separated
/// class list); the payload is whatever the caller renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode<P> {
    tag: Option<String>,
    payload: P,
}

impl<P> ContentNode<P> {
    pub fn new(tag: Option<String>, payload: P) -> Self {
        Self { tag, payload }
    }

    pub fn tagged(tag: impl Into<String>, payload: P) -> Self {
        Self::new(Some(tag.into()), payload)
    }

    pub fn untagged(payload: P) -> Self {
        Self::new(None, payload)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^language-[A-Za-z0-9_+#.\-]+$").expect("valid regex"))
}

/// Extract the language marker carried by `node`, if any.
///
/// The whole tag must look like `language-<name>`; a class list such as
/// `language-java highlighted` is not a marker. Whether the marker names a
/// supported language is the registry's call.
pub fn classify<P>(node: &ContentNode<P>) -> Option<&str> {
    let tag = node.tag()?;
    marker_regex().is_match(tag).then_some(tag)
}
