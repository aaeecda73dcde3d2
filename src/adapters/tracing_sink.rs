use crate::{OutputSink, Severity};

/// Forwards side effects to the active `tracing` subscriber.
///
/// Render notices are emitted at `INFO` with a `kind = "render"` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for TracingSink {
    fn render(&self, text: &str) {
        tracing::info!(kind = "render", "{}", text);
    }

    fn log(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Debug => tracing::debug!(kind = "log", "{}", text),
            Severity::Info => tracing::info!(kind = "log", "{}", text),
            Severity::Warn => tracing::warn!(kind = "log", "{}", text),
            Severity::Error => tracing::error!(kind = "log", "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture<F: FnOnce()>(f: F) -> Vec<String> {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        buffer.contents().lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_severities_map_to_tracing_levels() {
        let lines = capture(|| {
            let sink = TracingSink::new();
            sink.log(Severity::Debug, "Debug message");
            sink.log(Severity::Warn, "Warn message");
            sink.log(Severity::Info, "Info message");
            sink.log(Severity::Error, "Error message");
        });

        let expected = [
            ("DEBUG", "Debug message"),
            ("WARN", "Warn message"),
            ("INFO", "Info message"),
            ("ERROR", "Error message"),
        ];
        assert_eq!(lines.len(), expected.len(), "{lines:?}");
        for (line, (level, text)) in lines.iter().zip(expected) {
            assert!(line.contains(level), "{line}");
            assert!(line.contains(text), "{line}");
            assert!(line.contains("kind=\"log\""), "{line}");
        }
    }

    #[test]
    fn test_render_is_info_with_render_kind() {
        let lines = capture(|| TracingSink::new().render("A Mac checkbox rendering"));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("A Mac checkbox rendering"));
        assert!(lines[0].contains("kind=\"render\""));
    }
}
