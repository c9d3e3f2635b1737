//! Output channels a dog speaks through.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Receives every line a dog emits.
///
/// Any `Fn(&str) + Send + Sync` closure is a sink.
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}

impl<F> OutputSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, line: &str) {
        self(line);
    }
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        // A closed stdout has nowhere to report to.
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}

/// Emits each line as an `info` event on the `kennel::dog` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "kennel::dog", "{line}");
    }
}

/// Collects emitted lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl OutputSink for CaptureSink {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}
