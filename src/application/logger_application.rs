use super::DemoState;
use crate::factories::select_logger_factory;
use crate::{Environment, LoggerFactory, OutputSink, Severity};
use std::sync::Arc;

/// Messages logged by [`LoggerApplication::run`], in invocation order.
pub const DEMO_MESSAGES: [(Severity, &str); 4] = [
    (Severity::Debug, "Debug message"),
    (Severity::Warn, "Warn message"),
    (Severity::Info, "Info message"),
    (Severity::Error, "Error message"),
];

/// Client of the logger factory method.
pub struct LoggerApplication {
    factory: Box<dyn LoggerFactory>,
    state: DemoState,
}

impl LoggerApplication {
    pub fn new(factory: Box<dyn LoggerFactory>) -> Self {
        tracing::debug!(
            environment = %factory.environment(),
            "logger application initialized"
        );

        Self {
            factory,
            state: DemoState::Initialized,
        }
    }

    /// Selects the creator for `environment` and wraps it in a client.
    pub fn from_token(environment: &str, sink: Arc<dyn OutputSink>) -> Self {
        Self::new(select_logger_factory(environment, sink))
    }

    /// Creates a logger and logs one message per severity: debug, warn, info,
    /// error. Only the first call has any effect.
    pub fn run(&mut self) {
        if self.state.is_demonstrated() {
            tracing::debug!("logger application already demonstrated, skipping");
            return;
        }

        let logger = self.factory.create_logger();
        for (severity, message) in DEMO_MESSAGES {
            match severity {
                Severity::Debug => logger.debug(message),
                Severity::Info => logger.info(message),
                Severity::Warn => logger.warn(message),
                Severity::Error => logger.error(message),
            }
        }
        self.state = DemoState::Demonstrated;
    }

    pub fn environment(&self) -> Environment {
        self.factory.environment()
    }

    pub fn state(&self) -> DemoState {
        self.state
    }
}
