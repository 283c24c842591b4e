//! Diagnostic sinks.
//!
//! The pipeline reports what it removes and why (unlikely candidates, div
//! rewrites, conditional cleaning, relaxation steps). Messages go to the
//! [`LogSink`] injected into each [`crate::Document`]; nothing is written to a
//! process-wide logger unless the caller opts into [`TracingSink`].

use std::fmt;

/// Write-only destination for pipeline diagnostics.
pub trait LogSink {
    /// Whether messages will be recorded. Callers skip formatting when `false`.
    fn enabled(&self) -> bool {
        true
    }

    /// Record one diagnostic line.
    fn log(&self, message: fmt::Arguments<'_>);
}

/// Discards everything. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn enabled(&self) -> bool {
        false
    }

    fn log(&self, _message: fmt::Arguments<'_>) {}
}

/// Forwards diagnostics to `tracing` at debug level.
///
/// ```rust
/// use std::rc::Rc;
/// use rs_readability::{Document, TracingSink};
///
/// let doc = Document::new("<p>hello</p>")?.with_sink(Rc::new(TracingSink));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn enabled(&self) -> bool {
        tracing::enabled!(target: "rs_readability", tracing::Level::DEBUG)
    }

    fn log(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "rs_readability", "{message}");
    }
}

/// Log through a sink, skipping the formatting work when it is disabled.
macro_rules! trace_to {
    ($sink:expr, $($arg:tt)+) => {{
        let sink: &dyn $crate::logging::LogSink = $sink;
        if sink.enabled() {
            sink.log(format_args!($($arg)+));
        }
    }};
}

pub(crate) use trace_to;


#[cfg(test)]
mod tests {
    use super::testing::MemorySink;
    use super::*;

    #[test]
    fn noop_sink_is_disabled() {
        assert!(!NoopSink.enabled());
    }

    #[test]
    fn trace_to_formats_into_enabled_sink() {
        let sink = MemorySink::default();
        trace_to!(&sink, "removed {} nodes", 3);
        assert_eq!(sink.lines.borrow().as_slice(), ["removed 3 nodes"]);
    }
}
