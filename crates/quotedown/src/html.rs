//! HTML parsing support.
//!
//! Bridges `scraper`'s parsed documents into the owned [`Node`] tree the
//! renderer consumes. Only available with the `html` feature (on by
//! default).

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse a full HTML document into a Node tree.
///
/// The returned node is the document's `html` element.
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    from_element(document.root_element())
}

/// Parse an HTML fragment into a Node tree.
///
/// # Example
///
/// ```rust
/// use quotedown::html::parse_fragment;
///
/// let node = parse_fragment("<p>Hello</p>");
/// assert_eq!(node.tag_name(), "html");
/// assert!(node.descendants().any(|n| n.tag_name() == "p"));
/// ```
pub fn parse_fragment(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    from_element(fragment.root_element())
}

/// Convert a scraper element to our Node structure
fn from_element(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(from_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_children;

    #[test]
    fn test_parse_fragment_structure() {
        let root = parse_fragment(r#"<p>Hello <strong>World</strong></p>"#);
        assert_eq!(root.tag_name(), "html");

        let p = root
            .descendants()
            .find(|n| n.tag_name() == "p")
            .expect("fragment contains a <p>");
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_preserves_attributes() {
        let root = parse_fragment(r#"<a href="/x" title="t">click</a>"#);
        let a = root
            .descendants()
            .find(|n| n.tag_name() == "a")
            .expect("fragment contains an <a>");
        assert_eq!(a.attr("href"), Some("/x"));
        assert_eq!(a.attr("title"), Some("t"));
    }

    #[test]
    fn test_parse_carries_comments() {
        let root = parse_fragment("<div><!-- note -->text</div>");
        let div = root
            .descendants()
            .find(|n| n.tag_name() == "div")
            .expect("fragment contains a <div>");
        assert_eq!(div.children().count(), 2);
        // Comments are ignorable during rendering
        assert_eq!(render_children(&div), "> text");
    }

    #[test]
    fn test_parse_and_render_end_to_end() {
        let root = parse_fragment(
            r#"<div><p>New <strong>feature</strong></p><ul><li>a</li><li>b</li></ul></div>"#,
        );
        let div = root
            .descendants()
            .find(|n| n.tag_name() == "div")
            .expect("fragment contains a <div>");
        assert_eq!(
            render_children(&div),
            ">\n> New **feature**\n>\n> - a\n> - b\n"
        );
    }
}
