use crate::{OutputLine, OutputSink, Severity};
use std::sync::{Mutex, MutexGuard};

/// Sink that keeps every line in memory, in call order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<OutputLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<OutputLine>> {
        // a panicking writer cannot leave a half-pushed line behind
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a snapshot of the captured lines.
    pub fn lines(&self) -> Vec<OutputLine> {
        self.guard().clone()
    }

    /// Drains the captured lines.
    pub fn take(&self) -> Vec<OutputLine> {
        std::mem::take(&mut *self.guard())
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn render(&self, text: &str) {
        self.guard().push(OutputLine::render(text));
    }

    fn log(&self, severity: Severity, text: &str) {
        self.guard().push(OutputLine::log(severity, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_records_in_call_order() {
        let sink = MemorySink::new();
        sink.render("first");
        sink.log(Severity::Warn, "second");

        assert_eq!(
            sink.lines(),
            vec![
                OutputLine::render("first"),
                OutputLine::log(Severity::Warn, "second"),
            ]
        );
    }

    #[test]
    fn test_take_drains() {
        let sink = MemorySink::new();
        sink.log(Severity::Error, "boom");

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let sink = Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        sink.render(&format!("thread {i}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 100);
    }
}
