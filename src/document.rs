//! The extraction request.
//!
//! A [`Document`] owns the normalized input, the live tree and the options
//! for one page. [`Document::content`] runs the pipeline, relaxing the
//! heuristics and re-running from the normalized input while the result is
//! shorter than `retry_length`.

use std::rc::Rc;

use crate::dom;
use crate::encoding::transcode_to_utf8;
use crate::error::{Error, Result};
use crate::extractor::{assemble_article, relax, sanitize, RelaxationLevel, Sanitized};
use crate::html_processing;
use crate::logging::{trace_to, LogSink, NoopSink};
use crate::options::Options;
use crate::scoring::{self, Candidate, CandidateMap};

/// Placeholder parsed when the input yields no `<body>`.
const EMPTY_BODY: &str = "<body/>";

/// One page to extract the article from.
///
/// # Example
///
/// ```rust
/// use rs_readability::{Document, Options};
///
/// let html = r#"<html><head><title>Post</title></head><body>
///   <div class="sidebar"><p>Some sidebar content.</p></div>
///   <div class="article"><p>Some article content.</p></div>
/// </body></html>"#;
///
/// let mut doc = Document::with_options(html, Options {
///     min_text_length: 0,
///     retry_length: 1,
///     ..Options::default()
/// })?;
///
/// assert_eq!(doc.title(), "Post");
/// let content = doc.content()?;
/// assert!(content.contains("Some article content."));
/// assert!(!content.contains("sidebar"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub struct Document {
    input: String,
    tree: dom::Document,
    candidates: CandidateMap,
    best: Option<Candidate>,
    content: Option<String>,
    title: String,
    /// Heuristic configuration. Takes effect if changed before the first
    /// [`Document::content`] call; afterwards it shows the relaxation level
    /// that produced the result.
    pub options: Options,
    sink: Rc<dyn LogSink>,
}

impl Document {
    /// Parse `raw` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if no tree with a `<body>` can be built.
    pub fn new(raw: &str) -> Result<Self> {
        Self::with_options(raw, Options::default())
    }

    /// Parse `raw` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if no tree with a `<body>` can be built.
    pub fn with_options(raw: &str, options: Options) -> Result<Self> {
        let input = html_processing::normalize(raw);
        let parsed = dom::parse(&input);
        let title = parsed
            .select("title")
            .nodes()
            .first()
            .map(|node| dom::text_content(node).trim().to_string())
            .unwrap_or_default();
        let tree = ensure_body(parsed)?;

        Ok(Self {
            input,
            tree,
            candidates: CandidateMap::new(),
            best: None,
            content: None,
            title,
            options,
            sink: Rc::new(NoopSink),
        })
    }

    /// Decode raw bytes using the declared charset, then parse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if no tree with a `<body>` can be built.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Self::new(&transcode_to_utf8(raw))
    }

    /// Route diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Rc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Trimmed text of the first `<title>`, empty when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Candidates of the most recent run.
    #[must_use]
    pub fn candidates(&self) -> &CandidateMap {
        &self.candidates
    }

    /// Best candidate of the most recent run.
    #[must_use]
    pub fn best_candidate(&self) -> Option<Candidate> {
        self.best
    }

    /// The extracted article. Computed on first call, cached afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if a retry cannot rebuild the tree.
    pub fn content(&mut self) -> Result<&str> {
        if self.content.is_none() {
            let content = self.extract()?;
            self.content = Some(content);
        }
        Ok(self.content.as_deref().unwrap_or_default())
    }

    fn extract(&mut self) -> Result<String> {
        let mut run = 1;
        loop {
            let sanitized = self.run_once()?;
            if sanitized.text_length >= self.options.retry_length {
                return Ok(sanitized.html);
            }

            let Some(level) = relax(&mut self.options) else {
                trace_to!(
                    self.sink.as_ref(),
                    "Accepting {} chars after {run} runs, nothing left to relax",
                    sanitized.text_length
                );
                return Ok(sanitized.html);
            };

            trace_to!(
                self.sink.as_ref(),
                "Run {run} produced {} chars (< {}), retrying: {level}",
                sanitized.text_length,
                self.options.retry_length
            );
            self.tree = ensure_body(dom::parse(&self.input))?;
            run += 1;
        }
    }

    fn run_once(&mut self) -> Result<Sanitized> {
        let sink = Rc::clone(&self.sink);
        let sink = sink.as_ref();

        trace_to!(sink, "Extracting at level: {}", RelaxationLevel::of(&self.options));

        html_processing::remove_scripts(&self.tree);
        if self.options.remove_unlikely_candidates {
            html_processing::remove_unlikely_candidates(&self.tree, &self.options, sink);
        }
        html_processing::transform_misused_divs(&self.tree, &self.options, sink);

        self.candidates = scoring::score_paragraphs(&self.tree, &self.options);
        self.best = scoring::select_best_candidate(&self.tree, &self.candidates);
        let best = self
            .best
            .ok_or_else(|| Error::ParseError("document has no <body>".to_string()))?;

        let article = assemble_article(&self.tree, &self.candidates, &best, &self.options, sink);
        sanitize(&article, &self.title, &self.options, sink)
    }
}

/// Fall back to an empty placeholder when `tree` has no `<body>`, then drop
/// comment nodes the parser kept.
fn ensure_body(tree: dom::Document) -> Result<dom::Document> {
    let tree = if tree.body().is_some() {
        tree
    } else {
        let placeholder = dom::parse(EMPTY_BODY);
        if placeholder.body().is_none() {
            return Err(Error::ParseError("no <body> even in placeholder".to_string()));
        }
        placeholder
    };

    dom::remove_comments(&tree);
    Ok(tree)
}
