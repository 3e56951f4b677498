//! Node classification against the fixed tag allow-list.

use crate::node::{Node, NodeType};

/// Element tags carrying nothing the renderer should emit. Skipped silently,
/// unlike unrecognized tags which are reported.
const IGNORABLE_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// The closed set of node kinds the renderer knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Text,
    LineBreak,
    Paragraph,
    Image,
    UnorderedList,
    ListItem,
    Anchor,
    Preformatted,
    Code,
    Strong,
    /// Known non-content markup, skipped without a diagnostic
    Ignorable(&'a str),
    /// Markup outside the allow-list, skipped with a diagnostic
    Unrecognized(&'a str),
}

/// Classify a node by tag-name lookup.
///
/// Comments are ignorable; every element tag not in the fixed table is
/// surfaced as [`NodeKind::Unrecognized`] so the caller can report it
/// without aborting the walk.
pub fn classify(node: &Node) -> NodeKind<'_> {
    match node.node_type() {
        NodeType::Text => NodeKind::Text,
        NodeType::Comment => NodeKind::Ignorable("#comment"),
        NodeType::Element => match node.tag_name() {
            "br" => NodeKind::LineBreak,
            "p" => NodeKind::Paragraph,
            "img" => NodeKind::Image,
            "ul" => NodeKind::UnorderedList,
            "li" => NodeKind::ListItem,
            "a" => NodeKind::Anchor,
            "pre" => NodeKind::Preformatted,
            "code" => NodeKind::Code,
            "strong" => NodeKind::Strong,
            tag if IGNORABLE_TAGS.contains(&tag) => NodeKind::Ignorable(tag),
            tag => NodeKind::Unrecognized(tag),
        },
    }
}
