//! `:::code-tabs` containers.
//!
//! ````markdown
//! :::code-tabs{group=build}
//! ```java
//! var sut = new Calculator();
//! ```
//! ```kotlin
//! val sut = Calculator()
//! ```
//! :::
//! ````
//!
//! Every top-level block between the opener and the closing `:::` becomes a
//! [`ContentNode`]. Fenced code blocks are tagged `language-<info>`; anything
//! else is untagged and therefore dropped by the assembler.

use crate::assemble::{into_panels, PanelDescriptor};
use crate::node::ContentNode;
use crate::render::{SyncGroup, TabGroupRenderer};
use pulldown_cmark::{CodeBlockKind, Event, Tag, TagEnd};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// A rendered tab group, with the raw code of each panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeTabGroup {
    pub group: SyncGroup,
    pub panels: Vec<PanelDescriptor<String>>,
}

type BlockNode = ContentNode<Vec<Event<'static>>>;

enum Segment {
    Event(Event<'static>),
    Container {
        group: Option<SyncGroup>,
        nodes: Vec<BlockNode>,
    },
}

/// Transformer replacing code-tabs containers with rendered tab groups
pub struct CodeTabsTransformer<'a> {
    default_group: &'a SyncGroup,
    renderer: &'a dyn TabGroupRenderer,
}

impl<'a> CodeTabsTransformer<'a> {
    pub fn new(default_group: &'a SyncGroup, renderer: &'a dyn TabGroupRenderer) -> Self {
        Self {
            default_group,
            renderer,
        }
    }

    /// Returns (transformed_events, rendered_groups)
    pub fn transform(&self, events: Vec<Event<'static>>) -> (Vec<Event<'static>>, Vec<CodeTabGroup>) {
        let mut result = Vec::with_capacity(events.len());
        let mut groups = Vec::new();

        for segment in segment(events) {
            match segment {
                Segment::Event(event) => result.push(event),
                Segment::Container { group, nodes } => {
                    let group = group.unwrap_or_else(|| self.default_group.clone());
                    let panels = into_panels(nodes);
                    if panels.is_empty() {
                        tracing::debug!("code-tabs container without Java/Kotlin code, skipping");
                        continue;
                    }

                    warn_on_duplicates(&group, &panels);
                    tracing::debug!(
                        group = group.key().unwrap_or(""),
                        panels = panels.len(),
                        "assembled code tab group"
                    );

                    let summary = panels
                        .iter()
                        .map(|p| p.clone().map(|events| code_text(&events)))
                        .collect();
                    result.extend(self.renderer.render(&group, groups.len(), panels));
                    groups.push(CodeTabGroup {
                        group,
                        panels: summary,
                    });
                }
            }
        }

        (result, groups)
    }
}

fn segment(events: Vec<Event<'static>>) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < events.len() {
        if let Some((group, body_start)) = opener_at(&events, i) {
            if let Some((nodes, next)) = collect_container(&events, body_start) {
                out.push(Segment::Container { group, nodes });
                i = next;
                continue;
            }
            tracing::warn!("code-tabs container is never closed, leaving it as text");
        }

        out.push(Segment::Event(events[i].clone()));
        i += 1;
    }

    out
}

/// Split the container body into nodes, stopping at the closing `:::`.
///
/// Returns the nodes and the index right after the closer, or `None` when
/// the enclosing element ends, another opener starts, or the input runs out
/// first.
fn collect_container(events: &[Event<'static>], start: usize) -> Option<(Vec<BlockNode>, usize)> {
    let mut nodes = Vec::new();
    let mut block: Vec<Event<'static>> = Vec::new();
    let mut depth = 0usize;
    let mut i = start;

    while i < events.len() {
        let event = &events[i];
        if depth == 0 {
            if let Some(next) = closer_at(events, i) {
                return Some((nodes, next));
            }
            if opener_at(events, i).is_some() {
                return None;
            }
            match event {
                Event::Start(_) => {
                    block.push(event.clone());
                    depth = 1;
                }
                Event::End(_) => return None,
                _ => nodes.push(block_node(vec![event.clone()])),
            }
        } else {
            block.push(event.clone());
            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        nodes.push(block_node(std::mem::take(&mut block)));
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }

    None
}

fn block_node(events: Vec<Event<'static>>) -> BlockNode {
    let tag = match events.first() {
        Some(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))) => info
            .split_whitespace()
            .next()
            .map(|lang| format!("language-{lang}")),
        _ => None,
    };
    ContentNode::new(tag, events)
}

fn code_text(events: &[Event<'static>]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

fn warn_on_duplicates<P>(group: &SyncGroup, panels: &[PanelDescriptor<P>]) {
    let mut seen = HashSet::new();
    for panel in panels {
        if !seen.insert(panel.id) {
            tracing::warn!(
                group = group.key().unwrap_or(""),
                id = panel.id,
                "code tab group has more than one panel for the same language"
            );
        }
    }
}

/// Text of a paragraph made only of text events, and the index after it.
fn paragraph_text(events: &[Event<'static>], i: usize) -> Option<(String, usize)> {
    if !matches!(events.get(i), Some(Event::Start(Tag::Paragraph))) {
        return None;
    }
    let mut text = String::new();
    for (offset, event) in events[i + 1..].iter().enumerate() {
        match event {
            Event::Text(t) => text.push_str(t),
            Event::End(TagEnd::Paragraph) => return Some((text, i + offset + 2)),
            _ => return None,
        }
    }
    None
}

fn opener_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^:::\s*code-tabs\s*(?:\{\s*group\s*=\s*"?(?P<group>[^"}]*)"?\s*\})?$"#)
            .expect("valid regex")
    })
}

fn opener_at(events: &[Event<'static>], i: usize) -> Option<(Option<SyncGroup>, usize)> {
    let (text, next) = paragraph_text(events, i)?;
    let caps = opener_regex().captures(text.trim())?;
    let group = caps.name("group").map(|m| SyncGroup::new(m.as_str()));
    Some((group, next))
}

/// Index after a paragraph whose last line is `:::`.
///
/// Earlier lines of the same paragraph stay part of the container.
fn closer_at(events: &[Event<'static>], i: usize) -> Option<usize> {
    if !matches!(events.get(i), Some(Event::Start(Tag::Paragraph))) {
        return None;
    }
    // `None` once the current line holds anything but plain text
    let mut last_line = Some(String::new());
    for (offset, event) in events[i + 1..].iter().enumerate() {
        match event {
            Event::Text(t) => {
                if let Some(line) = last_line.as_mut() {
                    line.push_str(t);
                }
            }
            Event::SoftBreak | Event::HardBreak => last_line = Some(String::new()),
            Event::End(TagEnd::Paragraph) => {
                let closed = last_line.is_some_and(|line| line.trim() == ":::");
                return closed.then_some(i + offset + 2);
            }
            _ => last_line = None,
        }
    }
    None
}
