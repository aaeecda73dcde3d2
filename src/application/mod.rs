mod app_configuration;
mod gui_application;
mod logger_application;

pub use app_configuration::AppConfiguration;
pub use gui_application::GuiApplication;
pub use logger_application::{DEMO_MESSAGES, LoggerApplication};

/// Lifecycle of a client.
///
/// Clients are `Initialized` as soon as they are constructed and become
/// `Demonstrated` after their first `run`. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoState {
    Initialized,
    Demonstrated,
}

impl DemoState {
    pub fn is_demonstrated(&self) -> bool {
        matches!(self, Self::Demonstrated)
    }
}
