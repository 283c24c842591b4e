//! Article extraction stages downstream of scoring.
//!
//! # Module Structure
//!
//! - `tags`: Tag constants and the scoring tag bonus
//! - `assembler`: Gathers the best candidate and its siblings
//! - `pruning`: Conditional cleaning of tables, lists and divs
//! - `sanitize`: Re-parse, clean, flatten and normalize the article
//! - `state`: Relaxation ladder for the retry loop
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::{dom, scoring, Options, NoopSink};
//! use rs_readability::extractor::{assemble_article, sanitize};
//!
//! let options = Options { min_text_length: 0, ..Options::default() };
//! let doc = dom::parse("<body><div><p>One, two, three, four.</p></div></body>");
//!
//! let candidates = scoring::score_paragraphs(&doc, &options);
//! if let Some(best) = scoring::select_best_candidate(&doc, &candidates) {
//!     let article = assemble_article(&doc, &candidates, &best, &options, &NoopSink);
//!     let cleaned = sanitize(&article, "", &options, &NoopSink)?;
//!     assert!(cleaned.html.contains("One, two, three, four."));
//! }
//! # Ok::<(), rs_readability::Error>(())
//! ```

pub mod assembler;
pub mod pruning;
pub mod sanitize;
pub mod state;
pub mod tags;

pub use assembler::assemble_article;
pub use pruning::clean_conditionally;
pub use sanitize::{sanitize, Sanitized};
pub use state::{relax, RelaxationLevel};
