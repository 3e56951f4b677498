//! The recursive block-quote Markdown renderer.
//!
//! [`render_children`] walks one node's child sequence and returns the
//! concatenated Markdown fragment for those children in document order.
//! Every recursion level owns its output string and its sibling context;
//! nothing is shared across levels.

use log::warn;

use crate::classify::{classify, NodeKind};
use crate::context::SiblingContext;
use crate::node::Node;

/// Render the children of `node` as block-quoted Markdown.
///
/// The node itself is not emitted; it only provides the parent-tag context
/// for its children. Unrecognized tags are skipped and reported via `log`.
pub fn render_children(node: &Node) -> String {
    let mut out = String::new();
    let mut ctx = SiblingContext::new(node.tag_name());

    for child in node.children() {
        out.push_str(&render_node(child, &ctx));
        // The tracker advances for every child, even ones that emitted
        // nothing, so spacing decisions see the real document order.
        ctx.advance(child.kind_name());
    }

    out
}

fn render_node(node: &Node, ctx: &SiblingContext) -> String {
    match classify(node) {
        NodeKind::Text => render_text(node.value().unwrap_or(""), ctx),
        NodeKind::LineBreak => "  \n".to_string(),
        NodeKind::Paragraph => format!(">\n{}\n", render_children(node)),
        NodeKind::Image => render_image(node, ctx),
        NodeKind::UnorderedList => format!(">\n{}", render_children(node)),
        NodeKind::ListItem => format!("> - {}\n", render_children(node)),
        NodeKind::Anchor => render_anchor(node, ctx),
        NodeKind::Preformatted => format!(">\n> {}\n", render_children(node)),
        NodeKind::Code => format!("`{}`", node.text_content()),
        NodeKind::Strong => format!("**{}**", node.text_content()),
        NodeKind::Ignorable(_) => String::new(),
        NodeKind::Unrecognized(tag) => {
            warn!("skipping unrecognized tag <{tag}>");
            String::new()
        }
    }
}

fn render_text(text: &str, ctx: &SiblingContext) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    // Force a quoted line break after every sentence, before deciding on
    // the blockquote prefix.
    let broken = text.replace(". ", ".  \n> ");

    // Inside list items and anchors, and right after inline markup, the
    // text continues the current line instead of opening a quoted one.
    if ctx.parent_is_any(&["li", "a"]) || ctx.prev_is_any(&["code", "a", "strong"]) {
        broken
    } else {
        format!("> {broken}")
    }
}

fn render_image(node: &Node, ctx: &SiblingContext) -> String {
    let src = node.attr("src").unwrap_or("");
    let alt = node.attr("alt").unwrap_or("");

    let mut out = String::new();
    if !(ctx.prev_is_none() || ctx.prev_is_any(&["br"])) {
        out.push_str(">\n");
    }
    out.push_str("> ");
    out.push_str(src);
    if !alt.is_empty() {
        out.push_str(" -- ");
        out.push_str(alt);
    }
    out
}

fn render_anchor(node: &Node, ctx: &SiblingContext) -> String {
    let text = render_children(node);
    let href = node.attr("href").unwrap_or("");
    let link = format!("[{text}]({href})");

    if ctx.prev_is_any(&["#text"]) {
        link
    } else {
        format!("> {link}")
    }
}
