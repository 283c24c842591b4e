//! Sanitizing the assembled article.
//!
//! The assembled fragment is re-parsed into its own document and cleaned in
//! a fixed order: boilerplate headings, non-content embeds, empty
//! paragraphs, conditional cleaning, whitelist flattening, title injection
//! and whitespace normalization.

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::link_density::link_density;
use crate::logging::{trace_to, LogSink};
use crate::options::Options;
use crate::patterns::{HORIZONTAL_WHITESPACE, LINE_BREAKS, NBSP_RUN};
use crate::scoring::class_weight;

use super::pruning::clean_conditionally;
use super::tags::{HEADINGS, NON_CONTENT, REPLACE_WITH_WHITESPACE};

/// Highest link density a heading may carry.
const HEADING_MAX_DENSITY: f64 = 0.33;

/// Output of [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Serialized document.
    pub html: String,
    /// Character count of the normalized visible text.
    pub text_length: usize,
}

/// Collapse whitespace in extracted output.
///
/// Non-breaking space runs and horizontal whitespace runs become one space,
/// runs of line breaks become one `\n`, and the result is trimmed.
///
/// ```rust
/// use rs_readability::extractor::sanitize::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a&nbsp;&nbsp;b \n\n\t c  "), "a b\nc");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let text = NBSP_RUN.replace_all(text, " ");
    let text = HORIZONTAL_WHITESPACE.replace_all(&text, " ");
    let text = LINE_BREAKS.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Remove headings that read as boilerplate: negative class weight or more
/// than a third link text.
///
/// Each heading is judged by its own class, id and links, not by the
/// element that contains it.
pub fn remove_weak_headings(doc: &Document, options: &Options, sink: &dyn LogSink) -> usize {
    let mut removed = 0;
    for heading in doc.select(HEADINGS).nodes() {
        if class_weight(heading, options) < 0.0 || link_density(heading) > HEADING_MAX_DENSITY {
            trace_to!(sink, "Removing heading {}", dom::describe(heading));
            dom::remove(heading);
            removed += 1;
        }
    }
    removed
}

/// Remove paragraphs whose inner HTML is blank.
pub fn remove_empty_paragraphs(doc: &Document) -> usize {
    let mut removed = 0;
    for p in doc.select("p").nodes() {
        if dom::inner_html(p).trim().is_empty() {
            dom::remove(p);
            removed += 1;
        }
    }
    removed
}

/// Text of `node` with every element child padded by spaces, so block
/// boundaries left inside a collapsed container stay word boundaries.
fn padded_text(node: &dom::NodeRef) -> String {
    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            text.push(' ');
            text.push_str(&dom::text_content(&child));
            text.push(' ');
        } else {
            text.push_str(&child.text());
        }
    }
    text
}

/// Flatten every element under `body` to the whitelist.
///
/// Whitelisted elements stay and lose all attributes. Tags in the
/// replace-with-whitespace set become their text padded with spaces. Any
/// other element is replaced by its children. Elements are visited children
/// first, so list items and paragraphs are padded before their container
/// collapses.
pub fn flatten_to_whitelist(doc: &Document, options: &Options) {
    let Some(body) = doc.body() else {
        return;
    };
    let elements: Vec<_> = body
        .descendants()
        .into_iter()
        .filter(|node| node.is_element())
        .collect();

    for node in elements.iter().rev() {
        if !dom::is_attached(node) {
            continue;
        }

        let tag = dom::tag_name(node);
        if options.is_whitelisted(&tag) {
            node.remove_all_attrs();
        } else if REPLACE_WITH_WHITESPACE.contains(&tag.as_str()) {
            let text = padded_text(node);
            dom::replace_with_text(node, &format!(" {text} "));
        } else {
            dom::splice_out(node);
        }
    }
}

/// Put `title` into the document head as a fresh `<title>` element.
/// Blank titles are skipped.
pub fn inject_title(doc: &Document, title: &str) {
    if title.is_empty() {
        return;
    }
    let Some(head) = doc.head() else {
        return;
    };

    let element = doc.tree.new_element("title");
    head.append_child(&element);
    element.set_text(title);
}

/// Re-parse an assembled article and clean it.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the fragment yields no `<body>`.
pub fn sanitize(article: &str, title: &str, options: &Options, sink: &dyn LogSink) -> Result<Sanitized> {
    let doc = dom::parse(article);
    if doc.body().is_none() {
        return Err(Error::ParseError("assembled article has no <body>".to_string()));
    }

    remove_weak_headings(&doc, options, sink);
    doc.select(NON_CONTENT).remove();
    if options.remove_empty_nodes {
        remove_empty_paragraphs(&doc);
    }
    clean_conditionally(&doc, options, sink);

    flatten_to_whitelist(&doc, options);
    inject_title(&doc, title);

    let text_length = doc
        .body()
        .map(|body| normalize_whitespace(&dom::text_content(&body)).chars().count())
        .unwrap_or_default();

    Ok(Sanitized {
        html: normalize_whitespace(&doc.html()),
        text_length,
    })
}
