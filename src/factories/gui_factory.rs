// src/factories/gui_factory.rs

use crate::entities::widgets::{Mac, ThemedButton, ThemedCheckbox, WidgetFamily, Windows};
use crate::{Button, Checkbox, GuiFactory, OutputSink, Theme};
use std::marker::PhantomData;
use std::sync::Arc;

/// Concrete GUI factory bound to a single widget family.
///
/// Every product it creates shares the sink the factory was built with and
/// the family `F`.
pub struct ThemedFactory<F: WidgetFamily> {
    sink: Arc<dyn OutputSink>,
    _family: PhantomData<F>,
}

impl<F: WidgetFamily> ThemedFactory<F> {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            sink,
            _family: PhantomData,
        }
    }
}

impl<F: WidgetFamily> GuiFactory for ThemedFactory<F> {
    fn theme(&self) -> Theme {
        F::THEME
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(ThemedButton::<F>::new(Arc::clone(&self.sink)))
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(ThemedCheckbox::<F>::new(Arc::clone(&self.sink)))
    }
}

pub type WindowsFactory = ThemedFactory<Windows>;
pub type MacFactory = ThemedFactory<Mac>;
