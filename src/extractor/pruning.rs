//! Conditional cleaning.
//!
//! Tables, lists and divs of the assembled article are dropped when their
//! shape says "widget" rather than "prose": more images than paragraphs,
//! form inputs, link farms, stray embeds. Scores stamped by the assembler are
//! read back so a strongly scored container survives its own class weight.

use crate::dom::{self, Document, NodeRef};
use crate::link_density::link_density;
use crate::logging::{trace_to, LogSink};
use crate::options::Options;
use crate::scoring::class_weight;

use super::assembler::stamped_score;
use super::tags::{CONDITIONAL, LIST_TAGS};

/// Comma count at which a container is trusted as prose.
const PROSE_COMMAS: usize = 10;

/// Class weight at which a container is allowed more link text.
const TRUSTED_WEIGHT: f64 = 25.0;

/// Counts of the descendants conditional cleaning cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub paragraphs: usize,
    pub images: usize,
    pub list_items: usize,
    pub inputs: usize,
    pub embeds: usize,
}

impl ElementCounts {
    /// Count descendants of `node`.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        Self {
            paragraphs: dom::count_within(node, "p"),
            images: dom::count_within(node, "img"),
            list_items: dom::count_within(node, "li"),
            inputs: dom::count_within(node, "input"),
            embeds: dom::count_within(node, "embed"),
        }
    }
}

/// Why a container was removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CleanReason {
    NegativeScore,
    TooManyImages,
    TooManyListItems,
    TooManyInputs,
    TooShort,
    TooManyLinks,
    BadEmbeds,
}

impl std::fmt::Display for CleanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::NegativeScore => "a negative weight and score",
            Self::TooManyImages => "too many images",
            Self::TooManyListItems => "more <li>s than <p>s",
            Self::TooManyInputs => "less than 3x <p>s than <input>s",
            Self::TooShort => "too short content length without a single image",
            Self::TooManyLinks => "too many links for its weight",
            Self::BadEmbeds => "<embed>s with too short a content length, or too many <embed>s",
        };
        f.write_str(text)
    }
}

/// Decide whether `node` should be removed, and why.
///
/// `weight + score < 0` removes outright. Otherwise containers with fewer
/// than ten commas go through the shape tests in order; the first that
/// fires wins.
#[must_use]
pub fn clean_reason(node: &NodeRef, options: &Options) -> Option<CleanReason> {
    let weight = class_weight(node, options);
    let score = stamped_score(node).unwrap_or(0.0);

    if weight + score < 0.0 {
        return Some(CleanReason::NegativeScore);
    }

    let text = dom::text_content(node);
    if text.matches(',').count() >= PROSE_COMMAS {
        return None;
    }

    let counts = ElementCounts::of(node);
    let content_length = text.trim().chars().count();
    let density = link_density(node);
    let is_list = dom::has_tag(node, LIST_TAGS);

    if counts.images > counts.paragraphs {
        Some(CleanReason::TooManyImages)
    } else if counts.list_items.saturating_sub(100) > counts.paragraphs && !is_list {
        Some(CleanReason::TooManyListItems)
    } else if counts.inputs > counts.paragraphs / 3 {
        Some(CleanReason::TooManyInputs)
    } else if content_length < options.min_text_length && (counts.images == 0 || counts.images > 2) {
        Some(CleanReason::TooShort)
    } else if (weight < TRUSTED_WEIGHT && density > 0.2) || (weight >= TRUSTED_WEIGHT && density > 0.5) {
        Some(CleanReason::TooManyLinks)
    } else if (counts.embeds == 1 && content_length < 75) || counts.embeds > 1 {
        Some(CleanReason::BadEmbeds)
    } else {
        None
    }
}

/// Remove conditional containers (`table`, `ul`, `ol`, `div`) under `body`
/// that fail [`clean_reason`]. Does nothing when `clean_conditionally` is off.
///
/// Returns the number of removed containers.
pub fn clean_conditionally(doc: &Document, options: &Options, sink: &dyn LogSink) -> usize {
    if !options.clean_conditionally {
        return 0;
    }
    let Some(body) = doc.body() else {
        return 0;
    };

    let mut removed = 0;
    for node in dom::select_within(&body, CONDITIONAL) {
        if !dom::is_attached(&node) {
            continue;
        }

        if let Some(reason) = clean_reason(&node, options) {
            trace_to!(
                sink,
                "Conditionally cleaned {} with weight {} and content score {} because it has {reason}",
                dom::describe(&node),
                class_weight(&node, options),
                stamped_score(&node).unwrap_or(0.0)
            );
            dom::remove(&node);
            removed += 1;
        }
    }

    removed
}
