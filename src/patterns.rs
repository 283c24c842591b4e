//! Compiled regex patterns for content extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`. The class/id
//! vocabulary is exposed through [`Vocabulary`] so callers can swap it
//! per-document without touching the pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Preprocessing Patterns
// =============================================================================

/// Two or more `<br>` tags in a row, optionally separated by whitespace.
pub static BR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(<br[^>]*>[ \n\r\t]*){2,}").expect("BR_RUN regex")
});

/// Opening or closing `<font>` tag. Group 1 captures the optional slash.
pub static FONT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(/?)font[^>]*>").expect("FONT_TAG regex"));

/// A complete `<!-- ... -->` comment block, spanning lines.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

// =============================================================================
// Class/ID Vocabulary
// =============================================================================

/// Class/id markers removed regardless of any other signal.
pub static BLACKLIST_CANDIDATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)popupbody").expect("BLACKLIST_CANDIDATES regex"));

/// Navigation, sidebar, comment and ad vocabulary.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|community|disqus|extra|foot|header|menu|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Overrides [`UNLIKELY_CANDIDATES`] when the probe also looks like content.
pub static MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|main|shadow").expect("MAYBE_CANDIDATE regex")
});

/// Class/id terms worth -25 in [`crate::scoring::class_weight`].
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|shoutbox|sidebar|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE_CLASS regex")
});

/// Class/id terms worth +25 in [`crate::scoring::class_weight`].
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rticle|body|content|entry|hentry|main|page|pagination|post|text|blog|story")
        .expect("POSITIVE_CLASS regex")
});

/// Block-level children that stop a container from being relabeled to `<p>`.
pub static BLOCK_CHILDREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(a|blockquote|dl|div|img|ol|p|pre|table|ul)").expect("BLOCK_CHILDREN regex")
});

/// A period followed by a space or the end of the text.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.( |$)").expect("SENTENCE_END regex"));

// =============================================================================
// Output Normalization Patterns
// =============================================================================

/// Runs of non-breaking spaces, as entities or raw U+00A0.
pub static NBSP_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:&nbsp;|\x{a0})+").expect("NBSP_RUN regex"));

/// Runs of horizontal whitespace.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_WHITESPACE regex"));

/// Runs of line/form-feed characters, including spaces wedged between them.
pub static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*[\r\n\f][\r\n\f \t]*").expect("LINE_BREAKS regex"));

/// Named pattern sets driving the class/id and text heuristics.
///
/// Defaults to the compiled statics above. Replace individual fields to tune
/// the vocabulary for a site family:
///
/// ```rust
/// use regex::Regex;
/// use rs_readability::{Options, Vocabulary};
///
/// let options = Options {
///     vocabulary: Vocabulary {
///         unlikely: Regex::new(r"(?i)sidebar|promo-box").unwrap(),
///         ..Vocabulary::default()
///     },
///     ..Options::default()
/// };
/// assert!(options.vocabulary.unlikely.is_match("promo-box"));
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Unconditional removal markers.
    pub blacklist: Regex,
    /// Boilerplate markers, removed unless `maybe_candidate` also matches.
    pub unlikely: Regex,
    /// Content markers rescuing an `unlikely` match.
    pub maybe_candidate: Regex,
    /// Class weight -25 terms.
    pub negative: Regex,
    /// Class weight +25 terms.
    pub positive: Regex,
    /// Inner markup that keeps a container from becoming a paragraph.
    pub block_children: Regex,
    /// Sentence-terminal punctuation for short sibling paragraphs.
    pub sentence_end: Regex,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            blacklist: BLACKLIST_CANDIDATES.clone(),
            unlikely: UNLIKELY_CANDIDATES.clone(),
            maybe_candidate: MAYBE_CANDIDATE.clone(),
            negative: NEGATIVE_CLASS.clone(),
            positive: POSITIVE_CLASS.clone(),
            block_children: BLOCK_CHILDREN.clone(),
            sentence_end: SENTENCE_END.clone(),
        }
    }
}
