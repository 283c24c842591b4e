//! Configuration options for content extraction.
//!
//! The `Options` struct controls which heuristics run and how strict they
//! are. The retry loop switches the three heuristic flags off one by one when
//! the extracted text comes out too short, so values read back after
//! extraction reflect the relaxation level that produced the result.

use crate::patterns::Vocabulary;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_text_length: 0,
///     retry_length: 1,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Remove elements whose class/id looks like navigation, sidebars,
    /// comments or ads before scoring.
    ///
    /// Default: `true`
    pub remove_unlikely_candidates: bool,

    /// Add ±25 to candidate scores for positive/negative class and id terms.
    ///
    /// Default: `true`
    pub weight_classes: bool,

    /// Run the conditional cleaning battery over tables, lists and divs of
    /// the assembled article.
    ///
    /// Default: `true`
    pub clean_conditionally: bool,

    /// Minimum visible text length (characters) accepted before the retry
    /// loop relaxes the heuristics and runs again.
    ///
    /// Default: `250`
    pub retry_length: usize,

    /// Minimum text length (characters) for a paragraph to be scored. Also
    /// the short-content threshold used by conditional cleaning.
    ///
    /// Default: `25`
    pub min_text_length: usize,

    /// Remove paragraphs whose inner markup is empty after trimming.
    ///
    /// Default: `true`
    pub remove_empty_nodes: bool,

    /// Tags kept (attributes stripped) when the article is flattened. All
    /// other elements are spliced out or replaced by their padded text.
    ///
    /// Default: `["div", "p"]`
    pub whitelist_tags: Vec<String>,

    /// Class/id and text vocabulary driving the heuristics.
    pub vocabulary: Vocabulary,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            remove_unlikely_candidates: true,
            weight_classes: true,
            clean_conditionally: true,
            retry_length: 250,
            min_text_length: 25,
            remove_empty_nodes: true,
            whitelist_tags: vec!["div".to_string(), "p".to_string()],
            vocabulary: Vocabulary::default(),
        }
    }
}

impl Options {
    /// Whether `tag` is in [`Options::whitelist_tags`], ignoring case.
    #[must_use]
    pub fn is_whitelisted(&self, tag: &str) -> bool {
        self.whitelist_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
