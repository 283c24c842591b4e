//! Link Density
//!
//! Ratio of anchor text to total text inside an element. Link-heavy
//! containers (menus, tag clouds, related-story lists) score close to 1, prose
//! close to 0. Used to scale candidate scores, to vet sibling paragraphs, to
//! drop link-farm headings and in conditional cleaning.

use crate::dom::{self, NodeRef};

/// Character length of all `<a>` text inside `node`.
#[must_use]
pub fn link_text_len(node: &NodeRef) -> usize {
    dom::select_within(node, "a")
        .iter()
        .map(dom::text_len)
        .sum()
}

/// Anchor-text length divided by total text length.
///
/// Returns `0.0` for elements without text, so callers never divide by zero.
///
/// # Example
///
/// ```rust
/// use rs_readability::{dom, link_density::link_density};
///
/// let doc = dom::parse(r#"<div>abcd<a href="/">efgh</a></div>"#);
/// let div = doc.select("div").nodes()[0];
/// assert!((link_density(&div) - 0.5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_length = dom::text_len(node);
    if text_length == 0 {
        return 0.0;
    }

    link_text_len(node) as f64 / text_length as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn density_of(html: &str, selector: &str) -> f64 {
        let doc = dom::parse(html);
        let node = doc.select(selector).nodes()[0];
        link_density(&node)
    }

    #[test]
    fn empty_element_has_zero_density() {
        assert_eq!(density_of("<div></div>", "div"), 0.0);
    }

    #[test]
    fn empty_anchor_only_element_has_zero_density() {
        assert_eq!(density_of(r#"<div><a href="/"></a></div>"#, "div"), 0.0);
    }

    #[test]
    fn plain_prose_has_zero_density() {
        assert_eq!(density_of("<p>Just some words.</p>", "p"), 0.0);
    }

    #[test]
    fn all_links_has_full_density() {
        let density = density_of(r#"<ul><li><a href="/a">one</a></li><li><a href="/b">two</a></li></ul>"#, "ul");
        assert!((density - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn density_counts_characters_not_bytes() {
        // 2 chars of link text ("éé") over 4 chars total.
        let density = density_of(r#"<p>ab<a href="/">éé</a></p>"#, "p");
        assert!((density - 0.5).abs() < f64::EPSILON);
    }
}
