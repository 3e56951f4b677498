//! Sibling context tracked during one child-list traversal.
//!
//! A fresh context is created for every child-list scope and discarded when
//! that scope returns. Recursive calls into child subtrees never see the
//! caller's context; each starts with "no previous sibling".

/// Tracks the enclosing element and the previous sibling's kind name while
/// one child list is rendered.
///
/// Comparisons are by raw kind name (`"li"`, `"a"`, `"code"`, `"strong"`,
/// `"br"`, `"#text"`, ...), not by classified variant.
pub(crate) struct SiblingContext<'a> {
    parent: &'a str,
    prev: Option<&'a str>,
}

impl<'a> SiblingContext<'a> {
    /// Start a new scope under `parent` with no previous sibling
    pub(crate) fn new(parent: &'a str) -> Self {
        Self { parent, prev: None }
    }

    /// Is the enclosing element one of `names`?
    pub(crate) fn parent_is_any(&self, names: &[&str]) -> bool {
        names.contains(&self.parent)
    }

    /// Is the previous sibling's kind name one of `names`?
    ///
    /// Always false at the start of a scope.
    pub(crate) fn prev_is_any(&self, names: &[&str]) -> bool {
        self.prev.is_some_and(|prev| names.contains(&prev))
    }

    /// Has no sibling been processed yet in this scope?
    pub(crate) fn prev_is_none(&self) -> bool {
        self.prev.is_none()
    }

    /// Record the kind name of the child just processed.
    ///
    /// Called after every child in document order, including ones that
    /// emitted nothing.
    pub(crate) fn advance(&mut self, kind_name: &'a str) {
        self.prev = Some(kind_name);
    }
}
