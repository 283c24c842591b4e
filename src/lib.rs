//! # rs-readability
//!
//! Readability-style main content extraction for HTML documents.
//!
//! Given an arbitrary, often malformed, web page, the library decides which
//! subtree holds the article body from text density, punctuation and
//! class/id signals, then returns that subtree cleaned down to a small tag
//! whitelist together with the page title.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::{Document, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head><body>
//!   <div class="sidebar"><p>Some sidebar content.</p></div>
//!   <div class="article"><p>Some article content.</p></div>
//! </body></html>"#;
//!
//! let options = Options { min_text_length: 0, retry_length: 1, ..Options::default() };
//! let mut doc = Document::with_options(html, options)?;
//! println!("Title: {}", doc.title());
//! println!("Content: {}", doc.content()?);
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Normalize**: collapse `<br>` runs, neutralize `<font>`, drop comments
//! 2. **Filter**: remove `script`/`style` and boilerplate-looking elements
//! 3. **Score**: credit parents and grandparents of every paragraph
//! 4. **Assemble**: join the best candidate with qualifying siblings
//! 5. **Sanitize**: drop widgets, flatten to the whitelist, normalize whitespace
//! 6. **Retry**: relax one heuristic at a time while the result is too short

mod document;
mod error;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Text normalization and pre-scoring tree passes.
pub mod html_processing;

/// Article assembly, conditional cleaning, sanitizing and the retry ladder.
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Candidate scoring and best-candidate selection.
pub mod scoring;

/// Link density of elements.
pub mod link_density;

/// Diagnostic sinks.
pub mod logging;

// Public API - re-exports
pub use document::Document;
pub use error::{Error, Result};
pub use logging::{LogSink, NoopSink, TracingSink};
pub use options::Options;
pub use patterns::Vocabulary;

/// Extracts the article from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let html = "<html><body><article><p>Content, of a kind.</p></article></body></html>";
/// let content = extract(html)?;
/// assert!(content.contains("Content, of a kind."));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract(html: &str) -> Result<String> {
    extract_with_options(html, &Options::default())
}

/// Extracts the article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let html = "<html><body><div><p>Short, but kept.</p></div></body></html>";
/// let options = Options {
///     min_text_length: 0,
///     retry_length: 1,
///     ..Options::default()
/// };
/// let content = extract_with_options(html, &options)?;
/// assert!(content.contains("Short, but kept."));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<String> {
    let mut doc = Document::with_options(html, options.clone())?;
    doc.content().map(str::to_string)
}
