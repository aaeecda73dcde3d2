use super::DemoState;
use crate::{Button, Checkbox, GuiFactory, Theme};

/// Client of the abstract GUI factory.
///
/// Works with the factory and its products only through [`GuiFactory`],
/// [`Button`] and [`Checkbox`].
pub struct GuiApplication {
    factory: Box<dyn GuiFactory>,
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
    state: DemoState,
}

impl GuiApplication {
    /// Obtains a button and a checkbox from `factory`. Nothing is rendered yet.
    pub fn new(factory: Box<dyn GuiFactory>) -> Self {
        let button = factory.create_button();
        let checkbox = factory.create_checkbox();
        tracing::debug!(theme = %factory.theme(), "gui application initialized");

        Self {
            factory,
            button,
            checkbox,
            state: DemoState::Initialized,
        }
    }

    /// Renders the button, then the checkbox. Only the first call has any
    /// effect.
    pub fn run(&mut self) {
        if self.state.is_demonstrated() {
            tracing::debug!("gui application already demonstrated, skipping");
            return;
        }

        self.button.render();
        self.checkbox.render();
        self.state = DemoState::Demonstrated;
    }

    pub fn theme(&self) -> Theme {
        self.factory.theme()
    }

    pub fn state(&self) -> DemoState {
        self.state
    }
}
