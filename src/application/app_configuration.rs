use super::GuiApplication;
use crate::OutputSink;
use crate::factories::select_gui_factory;
use std::sync::Arc;

/// Bootstrap for the GUI client: picks the factory from the OS token and
/// hands it to a fresh [`GuiApplication`].
pub struct AppConfiguration;

impl AppConfiguration {
    pub fn bootstrap(os: &str, sink: Arc<dyn OutputSink>) -> GuiApplication {
        GuiApplication::new(select_gui_factory(os, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::adapters::MemorySink;

    #[test]
    fn test_bootstrap_selects_without_rendering() {
        let sink = Arc::new(MemorySink::new());

        let app = AppConfiguration::bootstrap("Windows", sink.clone());
        assert_eq!(app.theme(), Theme::Windows);

        let app = AppConfiguration::bootstrap("Linux", sink.clone());
        assert_eq!(app.theme(), Theme::Mac);

        assert!(sink.is_empty());
    }
}
