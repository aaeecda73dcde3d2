// src/factories/mod.rs

mod gui_factory;
mod logger_factory;

pub use gui_factory::{MacFactory, ThemedFactory, WindowsFactory};
pub use logger_factory::{DevelopmentLoggerFactory, ProductionLoggerFactory};

use crate::{DemoConfig, Environment, GuiFactory, LoggerFactory, OutputSink, Theme};
use std::sync::Arc;

/// Picks the GUI factory for a configuration token.
///
/// `"Windows"` yields a [`WindowsFactory`]; every other token yields a
/// [`MacFactory`].
pub fn select_gui_factory(token: &str, sink: Arc<dyn OutputSink>) -> Box<dyn GuiFactory> {
    let theme = Theme::select(token);
    tracing::debug!(token, %theme, "selected gui factory");

    match theme {
        Theme::Windows => Box::new(WindowsFactory::new(sink)),
        Theme::Mac => Box::new(MacFactory::new(sink)),
    }
}

/// Picks the logger creator for a configuration token.
///
/// `"production"` yields a [`ProductionLoggerFactory`]; every other token
/// yields a [`DevelopmentLoggerFactory`].
pub fn select_logger_factory(token: &str, sink: Arc<dyn OutputSink>) -> Box<dyn LoggerFactory> {
    let environment = Environment::select(token);
    tracing::debug!(token, %environment, "selected logger factory");

    match environment {
        Environment::Production => Box::new(ProductionLoggerFactory::new(sink)),
        Environment::Development => Box::new(DevelopmentLoggerFactory::new(sink)),
    }
}

/// Both factories a demonstration needs, resolved from one config.
pub struct Factories {
    gui: Box<dyn GuiFactory>,
    logger: Box<dyn LoggerFactory>,
}

impl Factories {
    pub fn from_config(config: &DemoConfig, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            gui: select_gui_factory(&config.theme, Arc::clone(&sink)),
            logger: select_logger_factory(&config.environment, sink),
        }
    }

    /// Returns the GUI factory.
    pub fn gui(&self) -> &dyn GuiFactory {
        self.gui.as_ref()
    }

    /// Returns the logger creator.
    pub fn logger(&self) -> &dyn LoggerFactory {
        self.logger.as_ref()
    }

    pub fn into_parts(self) -> (Box<dyn GuiFactory>, Box<dyn LoggerFactory>) {
        (self.gui, self.logger)
    }
}
