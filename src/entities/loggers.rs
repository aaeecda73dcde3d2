use crate::{Environment, Logger, OutputSink, Severity};
use std::sync::Arc;

/// Logger for production: only warnings and errors reach the sink.
///
/// `debug` and `info` are accepted and silently dropped.
pub struct ProductionLogger {
    sink: Arc<dyn OutputSink>,
}

impl ProductionLogger {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Logger for ProductionLogger {
    fn info(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        self.sink.log(Severity::Warn, message);
    }

    fn debug(&self, _message: &str) {}

    fn error(&self, message: &str) {
        self.sink.log(Severity::Error, message);
    }

    fn environment(&self) -> Environment {
        Environment::Production
    }
}

pub struct DevelopmentLogger {
    sink: Arc<dyn OutputSink>,
}

impl DevelopmentLogger {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Logger for DevelopmentLogger {
    fn info(&self, message: &str) {
        self.sink.log(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.sink.log(Severity::Warn, message);
    }

    fn debug(&self, message: &str) {
        self.sink.log(Severity::Debug, message);
    }

    fn error(&self, message: &str) {
        self.sink.log(Severity::Error, message);
    }

    fn environment(&self) -> Environment {
        Environment::Development
    }
}
