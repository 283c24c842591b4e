//! Article assembly.
//!
//! The best candidate rarely holds the whole article: lead paragraphs,
//! pull quotes and continuation blocks often sit next to it. Assembly walks
//! the children of the best candidate's parent and keeps the ones that look
//! like part of the same story.
//!
//! The assembled fragment is serialized and re-parsed by the sanitizer, so
//! candidate scores travel with the markup as a [`SCORE_ATTR`] attribute.

use crate::dom::{self, Document, NodeRef};
use crate::link_density::link_density;
use crate::logging::{trace_to, LogSink};
use crate::options::Options;
use crate::scoring::{Candidate, CandidateMap};

/// Attribute carrying a candidate score into the assembled fragment.
pub const SCORE_ATTR: &str = "data-readability-score";

/// Lowest sibling threshold, whatever the best score.
const MIN_SIBLING_THRESHOLD: f64 = 10.0;

/// Text length separating long and short sibling paragraphs.
const LONG_PARAGRAPH: usize = 80;

/// Highest link density accepted for a long sibling paragraph.
const LONG_PARAGRAPH_MAX_DENSITY: f64 = 0.25;

/// Score a sibling candidate needs to join the article.
#[must_use]
pub fn sibling_threshold(best: &Candidate) -> f64 {
    (best.score * 0.2).max(MIN_SIBLING_THRESHOLD)
}

/// Write every live candidate score onto its node as [`SCORE_ATTR`].
pub fn stamp_scores(doc: &Document, candidates: &CandidateMap) {
    for (node, candidate) in candidates.live(doc) {
        node.set_attr(SCORE_ATTR, &candidate.score.to_string());
    }
}

/// Score stamped on a node by [`stamp_scores`], if any.
#[must_use]
pub fn stamped_score(node: &NodeRef) -> Option<f64> {
    node.attr(SCORE_ATTR)
        .and_then(|value| value.trim().parse::<f64>().ok())
}

/// Whether a sibling paragraph reads like article prose.
///
/// Long paragraphs need little link text. Short ones need no links at all
/// and a sentence ending.
#[must_use]
pub fn is_prose_paragraph(node: &NodeRef, options: &Options) -> bool {
    if !dom::has_tag(node, &["p"]) {
        return false;
    }

    let text = dom::text_content(node);
    let length = text.chars().count();
    let density = link_density(node);

    if length >= LONG_PARAGRAPH {
        density < LONG_PARAGRAPH_MAX_DENSITY
    } else {
        density == 0.0 && options.vocabulary.sentence_end.is_match(&text)
    }
}

/// Gather the best candidate and its qualifying siblings into one `<div>`.
///
/// Each included paragraph is re-emitted as `<p>inner</p>`, everything else
/// as `<div>inner</div>`. Siblings are visited in document order.
#[must_use]
pub fn assemble_article(
    doc: &Document,
    candidates: &CandidateMap,
    best: &Candidate,
    options: &Options,
    sink: &dyn LogSink,
) -> String {
    stamp_scores(doc, candidates);

    let Some(best_node) = doc.tree.get(&best.node) else {
        return "<div></div>".to_string();
    };

    let threshold = sibling_threshold(best);
    let siblings = match dom::parent_element(&best_node) {
        Some(parent) => parent.element_children(),
        None => vec![best_node],
    };

    let mut output = String::from("<div>");

    for sibling in &siblings {
        let include = sibling.id == best.node
            || candidates
                .score_of(sibling.id)
                .is_some_and(|score| score >= threshold)
            || is_prose_paragraph(sibling, options);

        if !include {
            continue;
        }

        trace_to!(sink, "Appending {} to article", dom::describe(sibling));

        let tag = if dom::has_tag(sibling, &["p"]) { "p" } else { "div" };
        let score = sibling
            .attr(SCORE_ATTR)
            .map(|score| format!(r#" {SCORE_ATTR}="{score}""#))
            .unwrap_or_default();
        output.push_str(&format!("<{tag}{score}>{}</{tag}>", dom::inner_html(sibling)));
    }

    output.push_str("</div>");
    output
}
