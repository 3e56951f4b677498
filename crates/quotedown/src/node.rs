//! Owned DOM node structure consumed by the renderer.
//!
//! Any HTML parser can build this structure; the `html` feature provides a
//! bridge from `scraper`. The renderer treats the tree as read-only input.

/// Node types relevant to rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
    Comment,
}

/// An owned DOM node.
///
/// Tag names are stored lowercase; text and comment nodes use the
/// `#text` / `#comment` sentinel names familiar from the DOM.
#[derive(Debug, Clone)]
pub struct Node {
    node_type: NodeType,
    name: String,
    value: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            name: tag_name.to_lowercase(),
            value: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            node_type: NodeType::Element,
            name: tag_name.to_lowercase(),
            value: None,
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            name: "#text".to_string(),
            value: Some(content.to_string()),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            name: "#comment".to_string(),
            value: Some(content.to_string()),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get the node type
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase), or `#text` / `#comment`
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// The name the sibling tracker records for this node.
    ///
    /// Same as [`tag_name`](Self::tag_name); kept as its own accessor so the
    /// renderer reads as the rule table does.
    pub fn kind_name(&self) -> &str {
        &self.name
    }

    /// Raw text value for text and comment nodes
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.attrs
            .iter()
            .find(|(k, _)| *k == name_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All descendants in document order, excluding this node itself
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value.clone().unwrap_or_default(),
            NodeType::Comment => String::new(),
            NodeType::Element => {
                let mut out = String::new();
                for child in &self.children {
                    out.push_str(&child.text_content());
                }
                out
            }
        }
    }
}

/// Depth-first, document-order iterator over a node's descendants
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
