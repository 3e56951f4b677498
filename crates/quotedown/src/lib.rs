//! # quotedown
//!
//! Convert an article's DOM subtree into block-quoted Markdown.
//!
//! Unlike general-purpose HTML to Markdown converters, quotedown renders
//! everything inside a `> ` blockquote so the result can be pasted directly
//! into chat or documentation tools as a quoted excerpt. The rule set is a
//! fixed allow-list (`p`, `br`, `img`, `ul`, `li`, `a`, `pre`, `code`,
//! `strong`); anything else is skipped with a logged diagnostic rather than
//! aborting the walk.
//!
//! ## Design
//!
//! The converter accepts an owned [`Node`] tree instead of parsing HTML
//! strings itself. This keeps the core a pure, synchronous tree walk:
//!
//! - **Parser agnostic**: any HTML parser can build the Node structure
//! - **No shared state**: every recursion level returns its own string
//! - **Context aware**: quoting and spacing decisions depend on the
//!   enclosing element and the immediately preceding sibling
//!
//! The `html` feature (on by default) ships a bridge from `scraper`'s parsed
//! documents to the Node tree.
//!
//! ## Example
//!
//! ```rust
//! use quotedown::{render_children, Node};
//!
//! let mut div = Node::element("div");
//! let mut strong = Node::element("strong");
//! strong.add_child(Node::text("hello"));
//! div.add_child(strong);
//!
//! assert_eq!(render_children(&div), "**hello**");
//! ```

pub mod article;
pub mod classify;
mod context;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod render;

pub use article::Article;
pub use classify::{classify, NodeKind};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_fragment};
pub use node::{Node, NodeType};
pub use render::render_children;

/// Error type for quotedown operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selected element carries no content subtree to render.
    #[error("no content subtree found under <{0}>")]
    MissingContent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
