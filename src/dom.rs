//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` giving the pipeline a small, total tree
//! contract: attribute and text access that never fails, liveness checks for
//! arena handles, and explicit tree edits (detach, splice, replace with text).
//!
//! `dom_query` stores every node in an arena addressed by [`NodeId`]. Removing
//! a node only unlinks it; the handle stays valid but its subtree is no longer
//! reachable from the document root. [`is_attached`] is the liveness check
//! every pass uses before acting on a previously collected handle.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML text into a mutable document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Remove every comment node left in the tree after parsing.
pub fn remove_comments(doc: &Document) {
    let comments: Vec<NodeRef> = doc
        .root()
        .descendants_it()
        .filter(NodeRef::is_comment)
        .collect();

    for comment in comments {
        comment.remove_from_parent();
    }
}

// === Attribute Operations ===

/// Value of the `class` attribute, empty when absent.
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> String {
    node.class().map(|c| c.to_string()).unwrap_or_default()
}

/// Value of the `id` attribute, empty when absent.
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> String {
    node.id_attr().map(|i| i.to_string()).unwrap_or_default()
}

/// `#id.class` label used in diagnostics.
#[must_use]
pub fn describe(node: &NodeRef) -> String {
    format!("{}#{}.{}", tag_name(node), id(node), class_name(node))
}

// === Tag/Node Information ===

/// Lowercase tag name, empty for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Whether the node is an element with one of the given tag names.
#[must_use]
pub fn has_tag(node: &NodeRef, tags: &[&str]) -> bool {
    let tag = tag_name(node);
    !tag.is_empty() && tags.contains(&tag.as_str())
}

// === Text Content ===

/// All text of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Character count of [`text_content`].
#[inline]
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    node.text().chars().count()
}

/// Inner HTML, empty when serialization fails.
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    node.try_inner_html().unwrap_or_default()
}

// === Tree Navigation ===

/// Parent node if it is an element. The document node does not count.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Whether the node is still reachable from the document root.
#[must_use]
pub fn is_attached(node: &NodeRef) -> bool {
    node.is_document()
        || node
            .ancestors_it(None)
            .last()
            .is_some_and(|top| top.is_document())
}

/// Descendant elements of `node` matching `selector`, in document order.
#[must_use]
pub fn select_within<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select(selector).nodes().to_vec()
}

/// Number of descendant elements matching `selector`.
#[must_use]
pub fn count_within(node: &NodeRef, selector: &str) -> usize {
    Selection::from(*node).select(selector).length()
}

// === Tree Manipulation ===

/// Detach the node (and its subtree) from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Replace the node by its own children, keeping their order and position.
pub fn splice_out(node: &NodeRef) {
    if node.parent().is_none() {
        return;
    }

    for child in node.children() {
        node.insert_before(&child);
    }
    node.remove_from_parent();
}

/// Replace the node by a single text node.
pub fn replace_with_text(node: &NodeRef, text: &str) {
    if node.parent().is_none() {
        return;
    }

    let text_node = node.tree.new_text(text);
    node.insert_before(&text_node);
    node.remove_from_parent();
}
