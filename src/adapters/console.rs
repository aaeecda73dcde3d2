use crate::{OutputLine, OutputSink, Severity};

/// Writes render notices and debug/info lines to stdout, warnings and errors
/// to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn uses_stderr(severity: Severity) -> bool {
        matches!(severity, Severity::Warn | Severity::Error)
    }
}

impl OutputSink for ConsoleSink {
    fn render(&self, text: &str) {
        println!("{}", OutputLine::render(text));
    }

    fn log(&self, severity: Severity, text: &str) {
        let line = OutputLine::log(severity, text);
        if Self::uses_stderr(severity) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
