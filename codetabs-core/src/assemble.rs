//! Panel assembly: content nodes in, tab panels out.

use crate::language::{lookup, Language, LanguageDescriptor};
use crate::node::{classify, ContentNode};
use serde::Serialize;

/// One selectable tab, ready for a [`TabGroupRenderer`](crate::render::TabGroupRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelDescriptor<P> {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub language: Language,
    pub content: P,
}

impl<P> PanelDescriptor<P> {
    fn new(descriptor: &'static LanguageDescriptor, content: P) -> Self {
        Self {
            id: descriptor.id,
            label: descriptor.label,
            language: descriptor.language,
            content,
        }
    }

    /// Replace the content, keeping id, label and language.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> PanelDescriptor<Q> {
        PanelDescriptor {
            id: self.id,
            label: self.label,
            language: self.language,
            content: f(self.content),
        }
    }
}

fn descriptor_for<P>(node: &ContentNode<P>) -> Option<&'static LanguageDescriptor> {
    classify(node).and_then(lookup)
}

/// Build panels for the nodes that carry a supported language marker.
///
/// Unsupported or untagged nodes are skipped. Order is preserved and no
/// deduplication happens: two Java nodes yield two Java panels.
///
/// ```
/// use codetabs_core::{assemble, ContentNode};
///
/// let nodes = vec![
///     ContentNode::tagged("language-java", "int a;"),
///     ContentNode::tagged("language-python", "a = 1"),
///     ContentNode::tagged("language-kotlin", "val a: Int"),
/// ];
/// let ids: Vec<_> = assemble(&nodes).iter().map(|p| p.id).collect();
/// assert_eq!(ids, ["java", "kotlin"]);
/// ```
pub fn assemble<'a, P: 'a>(
    nodes: impl IntoIterator<Item = &'a ContentNode<P>>,
) -> Vec<PanelDescriptor<&'a P>> {
    nodes
        .into_iter()
        .filter_map(|node| descriptor_for(node).map(|d| PanelDescriptor::new(d, node.payload())))
        .collect()
}

/// Same as [`assemble`], moving each payload into its panel.
pub fn into_panels<P>(nodes: impl IntoIterator<Item = ContentNode<P>>) -> Vec<PanelDescriptor<P>> {
    nodes
        .into_iter()
        .filter_map(|node| descriptor_for(&node).map(|d| PanelDescriptor::new(d, node.into_payload())))
        .collect()
}
