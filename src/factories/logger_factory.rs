// src/factories/logger_factory.rs

use crate::entities::loggers::{DevelopmentLogger, ProductionLogger};
use crate::{Environment, Logger, LoggerFactory, OutputSink};
use std::sync::Arc;

pub struct ProductionLoggerFactory {
    sink: Arc<dyn OutputSink>,
}

impl ProductionLoggerFactory {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl LoggerFactory for ProductionLoggerFactory {
    fn environment(&self) -> Environment {
        Environment::Production
    }

    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(ProductionLogger::new(Arc::clone(&self.sink)))
    }
}

pub struct DevelopmentLoggerFactory {
    sink: Arc<dyn OutputSink>,
}

impl DevelopmentLoggerFactory {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl LoggerFactory for DevelopmentLoggerFactory {
    fn environment(&self) -> Environment {
        Environment::Development
    }

    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(DevelopmentLogger::new(Arc::clone(&self.sink)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;

    #[test]
    fn test_creators_return_their_environment() {
        let sink: Arc<dyn OutputSink> = Arc::new(MemorySink::new());

        let production = ProductionLoggerFactory::new(Arc::clone(&sink));
        assert_eq!(production.create_logger().environment(), Environment::Production);

        let development = DevelopmentLoggerFactory::new(sink);
        assert_eq!(
            development.create_logger().environment(),
            Environment::Development
        );
    }
}
