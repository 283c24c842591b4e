//! HTML processing before scoring.
//!
//! - [`normalize`]: textual cleanup applied to raw input before every parse
//! - [`remove_scripts`]: drops `script`/`style`
//! - [`remove_unlikely_candidates`]: drops elements whose class/id reads as
//!   navigation, sidebars, comments or ads
//! - [`transform_misused_divs`]: relabels text-only containers as paragraphs
//!   so the scorer sees them

use crate::dom::{self, Document};
use crate::extractor::tags::{DIV_TO_P_CONTAINERS, UNLIKELY_EXEMPT_TAGS};
use crate::logging::{trace_to, LogSink};
use crate::options::Options;
use crate::patterns::{BR_RUN, FONT_TAG, HTML_COMMENT};

/// Normalize raw HTML text before parsing.
///
/// 1. Stacked `<br>` runs become a paragraph boundary (`</p><p>`).
/// 2. `<font>` tags become `<span>` tags.
/// 3. Comment blocks are cut out of the text.
///
/// # Example
///
/// ```rust
/// use rs_readability::html_processing::normalize;
///
/// let out = normalize("a<br><br>b<font size=2>c</font><!-- x -->");
/// assert_eq!(out, "a</p><p>b<span>c</span>");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = BR_RUN.replace_all(raw, "</p><p>");
    let text = FONT_TAG.replace_all(&text, "<${1}span>");
    HTML_COMMENT.replace_all(&text, "").into_owned()
}

/// Remove every `script` and `style` element.
pub fn remove_scripts(doc: &Document) {
    doc.select("script, style").remove();
}

/// Remove elements that look like boilerplate from their class and id.
///
/// The probe is `class + id`. A blacklist match always removes. An unlikely
/// match removes unless the probe also matches the maybe-candidate pattern
/// or the element is an exempt structural tag. `html` and `body` are never
/// touched.
///
/// Returns the number of removed elements.
pub fn remove_unlikely_candidates(doc: &Document, options: &Options, sink: &dyn LogSink) -> usize {
    let vocabulary = &options.vocabulary;
    let mut removed = 0;

    for node in doc.select("*").nodes() {
        if !dom::is_attached(node) || dom::has_tag(node, &["html", "body"]) {
            continue;
        }

        let probe = format!("{}{}", dom::class_name(node), dom::id(node));
        if probe.is_empty() {
            continue;
        }

        let unlikely = vocabulary.unlikely.is_match(&probe)
            && !vocabulary.maybe_candidate.is_match(&probe)
            && !dom::has_tag(node, UNLIKELY_EXEMPT_TAGS);

        if vocabulary.blacklist.is_match(&probe) || unlikely {
            trace_to!(sink, "Removing unlikely candidate - {probe}");
            dom::remove(node);
            removed += 1;
        }
    }

    removed
}

/// Relabel containers without block-level children as `<p>`.
///
/// Only the tag changes; children and attributes stay put, so the rewrite is
/// idempotent.
///
/// Returns the number of relabeled elements.
pub fn transform_misused_divs(doc: &Document, options: &Options, sink: &dyn LogSink) -> usize {
    let mut transformed = 0;

    for node in doc.select(DIV_TO_P_CONTAINERS).nodes() {
        let inner = dom::inner_html(node);
        if options.vocabulary.block_children.is_match(&inner) {
            continue;
        }

        trace_to!(sink, "Altering {} to p", dom::describe(node));
        node.rename("p");
        transformed += 1;
    }

    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::testing::MemorySink;
    use crate::logging::NoopSink;

    #[test]
    fn test_normalize_collapses_br_runs_only() {
        assert_eq!(normalize("a<br>b"), "a<br>b");
        assert_eq!(normalize("a<br/>\n  <br />b"), "a</p><p>b");
        assert_eq!(normalize("a<BR><br><br>b"), "a</p><p>b");
    }

    #[test]
    fn test_normalize_rewrites_font_tags() {
        assert_eq!(
            normalize(r#"<FONT face="Arial">hi</font>"#),
            "<span>hi</span>"
        );
    }

    #[test]
    fn test_normalize_excises_comments() {
        assert_eq!(normalize("<p>a<!--\n<div>b</div>\n-->c</p>"), "<p>ac</p>");
    }

    #[test]
    fn test_remove_scripts() {
        let doc = dom::parse("<body><script>var x;</script><style>p{}</style><p>kept</p></body>");
        remove_scripts(&doc);
        assert!(doc.select("script, style").is_empty());
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn test_unlikely_sidebar_removed() {
        let doc = dom::parse(r#"<body><div class="sidebar"><p>side</p></div><div><p>main</p></div></body>"#);
        let removed = remove_unlikely_candidates(&doc, &Options::default(), &NoopSink);

        assert_eq!(removed, 1);
        assert!(doc.select(".sidebar").is_empty());
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn test_maybe_candidate_overrides_unlikely() {
        let doc = dom::parse(r#"<body><div class="article-comment"><p>x</p></div></body>"#);
        let removed = remove_unlikely_candidates(&doc, &Options::default(), &NoopSink);

        assert_eq!(removed, 0);
        assert!(doc.select(".article-comment").exists());
    }

    #[test]
    fn test_blacklist_cannot_be_overridden() {
        let doc = dom::parse(r#"<body><div id="popupbody-main"><p>x</p></div></body>"#);
        remove_unlikely_candidates(&doc, &Options::default(), &NoopSink);
        assert!(doc.select("div").is_empty());
    }

    #[test]
    fn test_probe_joins_class_and_id() {
        let doc = dom::parse(r#"<body><div class="side" id="bar"><p>x</p></div></body>"#);
        remove_unlikely_candidates(&doc, &Options::default(), &NoopSink);
        assert!(doc.select("div").is_empty());
    }

    #[test]
    fn test_structural_header_and_footer_tags_exempt() {
        let doc = dom::parse(
            r#"<body><header class="site-header">h</header><footer class="footer">f</footer><div class="footer">d</div></body>"#,
        );
        remove_unlikely_candidates(&doc, &Options::default(), &NoopSink);

        assert!(doc.select("header").exists());
        assert!(doc.select("footer").exists());
        assert!(doc.select("div").is_empty());
    }

    #[test]
    fn test_body_and_html_never_removed() {
        let doc = dom::parse(r#"<html class="sidebar"><body class="comment"><p>x</p></body></html>"#);
        remove_unlikely_candidates(&doc, &Options::default(), &NoopSink);
        assert!(doc.select("body p").exists());
    }

    #[test]
    fn test_unlikely_removal_is_logged() {
        let doc = dom::parse(r#"<body><div class="sidebar">x</div></body>"#);
        let sink = MemorySink::default();
        remove_unlikely_candidates(&doc, &Options::default(), &sink);
        assert_eq!(sink.lines.borrow().len(), 1);
        assert!(sink.lines.borrow()[0].contains("sidebar"));
    }

    #[test]
    fn test_text_only_div_becomes_paragraph() {
        let doc = dom::parse("<body><div>Just text <b>bold</b></div><div><p>real</p></div></body>");
        let changed = transform_misused_divs(&doc, &Options::default(), &NoopSink);

        assert_eq!(changed, 1);
        assert_eq!(doc.select("p").length(), 2);
        assert_eq!(doc.select("div").length(), 1);
    }

    #[test]
    fn test_transform_is_idempotent() {
        let doc = dom::parse("<body><div>text</div></body>");
        transform_misused_divs(&doc, &Options::default(), &NoopSink);
        let first = doc.html().to_string();
        let changed = transform_misused_divs(&doc, &Options::default(), &NoopSink);

        assert_eq!(changed, 0);
        assert_eq!(doc.html().to_string(), first);
    }

    #[test]
    fn test_container_with_image_is_kept() {
        let doc = dom::parse(r#"<body><div><img src="a.png">caption</div></body>"#);
        transform_misused_divs(&doc, &Options::default(), &NoopSink);
        assert!(doc.select("div").exists());
    }
}
