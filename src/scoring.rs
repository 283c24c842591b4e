//! Candidate scoring and best-candidate selection.
//!
//! Every scorable element (`p`, `pre`, `td`) with enough text credits its
//! parent with a content score and its grandparent with half of it. Parents
//! and grandparents start from a class/id weight plus a tag bonus. Finally
//! each accumulated score is scaled by `1 - link_density` so link farms sink.
//!
//! Candidates are keyed by [`NodeId`], the arena index of the node in the
//! tree being scored. A map built for one tree must never be consulted with
//! nodes from another.

use std::collections::HashMap;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::extractor::tags::{tag_bonus, SCORABLE};
use crate::link_density::link_density;
use crate::options::Options;

/// A scored container considered as a possible article root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Node in the scored tree.
    pub node: NodeId,
    /// Accumulated score. Signed and unbounded.
    pub score: f64,
}

/// Candidates in creation order, keyed by node identity.
#[derive(Debug, Clone, Default)]
pub struct CandidateMap {
    order: Vec<NodeId>,
    scores: HashMap<NodeId, f64>,
}

impl CandidateMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no candidate was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Score of `node`, if it is a candidate.
    #[must_use]
    pub fn score_of(&self, node: NodeId) -> Option<f64> {
        self.scores.get(&node).copied()
    }

    /// Create the candidate for `node` unless it exists.
    pub fn ensure<F>(&mut self, node: NodeId, initial: F)
    where
        F: FnOnce() -> f64,
    {
        if !self.scores.contains_key(&node) {
            self.scores.insert(node, initial());
            self.order.push(node);
        }
    }

    /// Add `delta` to an existing candidate. Unknown nodes are ignored.
    pub fn add(&mut self, node: NodeId, delta: f64) {
        if let Some(score) = self.scores.get_mut(&node) {
            *score += delta;
        }
    }

    /// Candidates in creation order.
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.order.iter().filter_map(|node| {
            self.scores.get(node).map(|&score| Candidate { node: *node, score })
        })
    }

    /// Candidates whose node is still attached to `doc`, with their handles.
    pub fn live<'a>(&'a self, doc: &'a Document) -> impl Iterator<Item = (NodeRef<'a>, Candidate)> + 'a {
        self.iter().filter_map(move |candidate| {
            doc.tree
                .get(&candidate.node)
                .filter(dom::is_attached)
                .map(|node| (node, candidate))
        })
    }

    fn scale(&mut self, node: NodeId, factor: f64) {
        if let Some(score) = self.scores.get_mut(&node) {
            *score *= factor;
        }
    }
}

/// Class/id weight: -25 per negative match and +25 per positive match,
/// checked separately on `class` and `id`. Zero when `weight_classes` is off.
#[must_use]
pub fn class_weight(node: &NodeRef, options: &Options) -> f64 {
    if !options.weight_classes {
        return 0.0;
    }

    let vocabulary = &options.vocabulary;
    let mut weight = 0.0;

    for value in [dom::class_name(node), dom::id(node)] {
        if value.is_empty() {
            continue;
        }
        if vocabulary.negative.is_match(&value) {
            weight -= 25.0;
        }
        if vocabulary.positive.is_match(&value) {
            weight += 25.0;
        }
    }

    weight
}

/// Initial score of a new candidate: class weight combined with a tag bonus.
#[must_use]
pub fn score_node(node: &NodeRef, options: &Options) -> f64 {
    tag_bonus(&dom::tag_name(node)).apply(class_weight(node, options))
}

/// Content score of a scored element's text:
/// `1 + (commas + 1) + min(floor(len / 100), 3)`.
#[must_use]
pub fn content_score(text: &str) -> f64 {
    let commas = text.matches(',').count();
    let length_bonus = (text.chars().count() / 100).min(3);

    1.0 + (commas + 1) as f64 + length_bonus as f64
}

/// Score every scorable element and return the resulting candidates.
///
/// Elements with fewer than `min_text_length` characters are skipped and
/// credit nothing to any ancestor.
#[must_use]
pub fn score_paragraphs(doc: &Document, options: &Options) -> CandidateMap {
    let mut candidates = CandidateMap::new();

    for node in doc.select(SCORABLE).nodes() {
        let text = dom::text_content(node);
        if text.chars().count() < options.min_text_length {
            continue;
        }

        let Some(parent) = dom::parent_element(node) else {
            continue;
        };
        let grandparent = dom::parent_element(&parent);

        candidates.ensure(parent.id, || score_node(&parent, options));
        if let Some(grandparent) = &grandparent {
            candidates.ensure(grandparent.id, || score_node(grandparent, options));
        }

        let score = content_score(&text);
        candidates.add(parent.id, score);
        if let Some(grandparent) = &grandparent {
            candidates.add(grandparent.id, score / 2.0);
        }
    }

    // Good content has little link text and is mostly unaffected here.
    let densities: Vec<(NodeId, f64)> = candidates
        .live(doc)
        .map(|(node, candidate)| (candidate.node, link_density(&node)))
        .collect();
    for (node, density) in densities {
        candidates.scale(node, 1.0 - density);
    }

    candidates
}

/// Pick the highest-scoring live candidate. Ties keep the first created.
///
/// Falls back to a zero-score candidate over `<body>` when nothing was
/// scored. Returns `None` only for a tree without a body.
#[must_use]
pub fn select_best_candidate(doc: &Document, candidates: &CandidateMap) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (_, candidate) in candidates.live(doc) {
        if best.is_none_or(|b| b.score < candidate.score) {
            best = Some(candidate);
        }
    }

    best.or_else(|| {
        doc.body().map(|body| Candidate {
            node: body.id,
            score: 0.0,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector).nodes()[0]
    }

    #[test]
    fn test_content_score() {
        assert_eq!(content_score(""), 2.0);
        assert_eq!(content_score("a, b, c"), 4.0);
        assert_eq!(content_score(&"x".repeat(250)), 4.0);
        assert_eq!(content_score(&"x".repeat(1000)), 5.0);
    }

    #[test]
    fn test_class_weight() {
        let doc = dom::parse(
            r#"<div class="sidebar" id="a"></div><div class="post-body" id="b"></div><div class="comment-content" id="c"></div><div id="footer" class="entry"></div>"#,
        );
        let opts = Options::default();

        assert_eq!(class_weight(&node(&doc, "#a"), &opts), -25.0);
        assert_eq!(class_weight(&node(&doc, "#b"), &opts), 25.0);
        assert_eq!(class_weight(&node(&doc, "#c"), &opts), 0.0);
        // class +25, id -25
        assert_eq!(class_weight(&node(&doc, ".entry"), &opts), 0.0);
    }

    #[test]
    fn test_class_weight_disabled() {
        let doc = dom::parse(r#"<div class="sidebar"></div>"#);
        let opts = Options {
            weight_classes: false,
            ..Options::default()
        };
        assert_eq!(class_weight(&node(&doc, "div"), &opts), 0.0);
    }

    #[test]
    fn test_score_node_tag_bonus() {
        let doc = dom::parse(
            r#"<div class="content"></div><blockquote class="content"></blockquote><table><tr><th>h</th></tr></table>"#,
        );
        let opts = Options::default();

        assert_eq!(score_node(&node(&doc, "div"), &opts), 30.0);
        assert_eq!(score_node(&node(&doc, "blockquote"), &opts), 3.0);
        assert_eq!(score_node(&node(&doc, "th"), &opts), -5.0);
    }

    #[test]
    fn test_parent_gets_full_and_grandparent_half() {
        let doc = dom::parse("<body><section><article><p>Hello, world</p></article></section></body>");
        let opts = Options {
            min_text_length: 0,
            ..Options::default()
        };
        let candidates = score_paragraphs(&doc, &opts);

        // "Hello, world": 1 + (1 + 1) + 0
        assert_eq!(candidates.score_of(node(&doc, "article").id), Some(3.0));
        assert_eq!(candidates.score_of(node(&doc, "section").id), Some(1.5));
        assert_eq!(candidates.score_of(node(&doc, "body").id), None);
    }

    #[test]
    fn test_short_paragraph_contributes_nothing() {
        let doc = dom::parse("<body><div><p>tiny</p></div></body>");
        let candidates = score_paragraphs(&doc, &Options::default());

        assert!(candidates.is_empty());
        assert_eq!(candidates.score_of(node(&doc, "div").id), None);
    }

    #[test]
    fn test_scores_scaled_by_link_density() {
        let doc = dom::parse(
            r#"<body><div><p>aaaaaaaaaa<a href="/">bbbbbbbbbb</a></p></div></body>"#,
        );
        let opts = Options {
            min_text_length: 0,
            ..Options::default()
        };
        let candidates = score_paragraphs(&doc, &opts);

        // div: 5 + (1 + 1 + 0) = 7, halved by 0.5 link density
        assert_eq!(candidates.score_of(node(&doc, "div").id), Some(3.5));
    }

    #[test]
    fn test_best_candidate_prefers_highest_score() {
        let doc = dom::parse(
            r#"<body><div id="small"><p>One sentence here, short.</p></div><div id="big"><p>First, second, third, fourth, fifth, and more.</p><p>Another paragraph, with commas.</p></div></body>"#,
        );
        let opts = Options {
            min_text_length: 0,
            ..Options::default()
        };
        let candidates = score_paragraphs(&doc, &opts);
        let best = select_best_candidate(&doc, &candidates).map(|c| c.node);

        assert_eq!(best, Some(node(&doc, "#big").id));
    }

    #[test]
    fn test_best_candidate_ties_keep_first() {
        let doc = dom::parse(
            r#"<body><div id="first"><p>same text</p></div><div id="second"><p>same text</p></div></body>"#,
        );
        let opts = Options {
            min_text_length: 0,
            ..Options::default()
        };
        let candidates = score_paragraphs(&doc, &opts);
        let best = select_best_candidate(&doc, &candidates).map(|c| c.node);

        assert_eq!(best, Some(node(&doc, "#first").id));
    }

    #[test]
    fn test_best_candidate_falls_back_to_body() {
        let doc = dom::parse("<body><span>nothing scorable</span></body>");
        let candidates = score_paragraphs(&doc, &Options::default());
        let best = select_best_candidate(&doc, &candidates);

        assert_eq!(
            best,
            Some(Candidate {
                node: node(&doc, "body").id,
                score: 0.0
            })
        );
    }

    #[test]
    fn test_detached_candidates_are_ignored() {
        let doc = dom::parse(
            r#"<body><div id="gone"><p>Lots, of, commas, here, really.</p></div><div id="kept"><p>plain</p></div></body>"#,
        );
        let opts = Options {
            min_text_length: 0,
            ..Options::default()
        };
        let candidates = score_paragraphs(&doc, &opts);
        dom::remove(&node(&doc, "#gone"));

        let best = select_best_candidate(&doc, &candidates).map(|c| c.node);
        assert_ne!(best, Some(node(&doc, "#gone").id));
    }
}
