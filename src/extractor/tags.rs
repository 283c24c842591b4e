//! Tag constants used across the pipeline.
//!
//! Selector strings are in `dom_query` CSS syntax; slices are for
//! [`crate::dom::has_tag`] lookups.

// === Selectors ===

/// Containers relabeled to `<p>` when they hold no block-level children.
pub const DIV_TO_P_CONTAINERS: &str = "div, article, section, header, footer";

/// Elements whose text is scored.
pub const SCORABLE: &str = "p, pre, td";

/// Headings checked for boilerplate in the sanitized article.
pub const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";

/// Interactive and embedding elements dropped from the article.
pub const NON_CONTENT: &str = "form, object, iframe, embed";

/// Elements subject to conditional cleaning.
pub const CONDITIONAL: &str = "table, ul, ol, div";

// === Tag Lists ===

/// Structural tags kept by the unlikely-candidate filter even when their
/// class/id matches the unlikely vocabulary.
pub const UNLIKELY_EXEMPT_TAGS: &[&str] = &["header", "footer"];

/// List containers. Conditional cleaning skips the list-item test for them.
pub const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Tags collapsed to their padded text during flattening unless whitelisted.
pub const REPLACE_WITH_WHITESPACE: &[&str] = &[
    "br", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "dl", "dd", "ol", "li", "ul", "address",
    "blockquote", "center",
];

/// Tag bonus applied by [`crate::scoring::score_node`].
#[must_use]
pub fn tag_bonus(tag: &str) -> TagBonus {
    match tag {
        "div" => TagBonus::Add(5.0),
        "blockquote" | "form" => TagBonus::Fixed(3.0),
        "th" => TagBonus::Add(-5.0),
        _ => TagBonus::Add(0.0),
    }
}

/// How a tag adjusts the initial candidate score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagBonus {
    /// Added to the class weight.
    Add(f64),
    /// Replaces the class weight.
    Fixed(f64),
}

impl TagBonus {
    /// Combine with a class weight into an initial score.
    #[must_use]
    pub fn apply(self, class_weight: f64) -> f64 {
        match self {
            Self::Add(bonus) => class_weight + bonus,
            Self::Fixed(score) => score,
        }
    }
}
