use crate::application::{GuiApplication, LoggerApplication};
use crate::factories::Factories;
use crate::{CreationalError, DemoConfig, DemoReport, OutputSink, RunId};
use std::sync::Arc;

/// Runs both demonstrations against one sink: the GUI abstract factory first,
/// then the logger factory method.
pub struct DemoService {
    config: DemoConfig,
    sink: Arc<dyn OutputSink>,
}

impl DemoService {
    pub fn new(config: DemoConfig, sink: Arc<dyn OutputSink>) -> Self {
        Self { config, sink }
    }

    /// Fresh factories and clients are built on every call, so runs never
    /// share state.
    pub fn run(&self) -> Result<DemoReport, CreationalError> {
        self.config.validate()?;

        let run_id = RunId::new();
        let started_at = chrono::Utc::now();
        let span = tracing::info_span!("demo_run", run_id = %run_id);
        let _guard = span.enter();

        let (gui_factory, logger_factory) =
            Factories::from_config(&self.config, Arc::clone(&self.sink)).into_parts();
        let mut gui = GuiApplication::new(gui_factory);
        let mut logging = LoggerApplication::new(logger_factory);

        gui.run();
        logging.run();

        let report = DemoReport {
            run_id,
            started_at,
            theme: gui.theme(),
            environment: logging.environment(),
        };
        tracing::info!(
            theme = %report.theme,
            environment = %report.environment,
            "demo run finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::{Environment, OutputLine, Severity, Theme};

    #[test]
    fn test_run_default_config() {
        let sink = Arc::new(MemorySink::new());
        let service = DemoService::new(DemoConfig::default(), sink.clone());

        let report = service.run().unwrap();
        assert_eq!(report.theme, Theme::Windows);
        assert_eq!(report.environment, Environment::Production);
        assert_eq!(
            sink.lines(),
            vec![
                OutputLine::render("A Windows button rendering"),
                OutputLine::render("A Windows checkbox rendering"),
                OutputLine::log(Severity::Warn, "Warn message"),
                OutputLine::log(Severity::Error, "Error message"),
            ]
        );
    }

    #[test]
    fn test_run_resolves_both_families_from_config() {
        let sink = Arc::new(MemorySink::new());
        let service = DemoService::new(DemoConfig::new("Linux", "dev"), sink.clone());

        let report = service.run().unwrap();
        assert_eq!(report.theme, Theme::Mac);
        assert_eq!(report.environment, Environment::Development);

        let lines = sink.take();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], OutputLine::render("A Mac button rendering"));
        assert_eq!(lines[1], OutputLine::render("A Mac checkbox rendering"));
        assert_eq!(lines[2], OutputLine::log(Severity::Debug, "Debug message"));
        assert_eq!(lines[5], OutputLine::log(Severity::Error, "Error message"));
    }

    #[test]
    fn test_strict_config_fails_before_any_output() {
        let sink = Arc::new(MemorySink::new());
        let config = DemoConfig::new("Linux", "production").strict();
        let service = DemoService::new(config, sink.clone());

        assert!(service.run().is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_each_run_gets_new_id() {
        let sink = Arc::new(MemorySink::new());
        let service = DemoService::new(DemoConfig::default(), sink);

        let first = service.run().unwrap();
        let second = service.run().unwrap();
        assert_ne!(first.run_id, second.run_id);
    }
}
