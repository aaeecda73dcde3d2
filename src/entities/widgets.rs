use crate::{Button, Checkbox, OutputSink, Theme};
use std::marker::PhantomData;
use std::sync::Arc;

/// Marker for a family of mutually compatible widgets.
///
/// Concrete widgets and factories are generic over a family, so a factory for
/// one family has no way to name a widget from another.
pub trait WidgetFamily: Send + Sync + 'static {
    const THEME: Theme;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Windows;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mac;

impl WidgetFamily for Windows {
    const THEME: Theme = Theme::Windows;
}

impl WidgetFamily for Mac {
    const THEME: Theme = Theme::Mac;
}

pub struct ThemedButton<F: WidgetFamily> {
    sink: Arc<dyn OutputSink>,
    _family: PhantomData<F>,
}

impl<F: WidgetFamily> ThemedButton<F> {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            sink,
            _family: PhantomData,
        }
    }
}

impl<F: WidgetFamily> Button for ThemedButton<F> {
    fn render(&self) {
        self.sink.render(&format!("A {} button rendering", F::THEME));
    }

    fn theme(&self) -> Theme {
        F::THEME
    }
}

pub struct ThemedCheckbox<F: WidgetFamily> {
    sink: Arc<dyn OutputSink>,
    _family: PhantomData<F>,
}

impl<F: WidgetFamily> ThemedCheckbox<F> {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            sink,
            _family: PhantomData,
        }
    }
}

impl<F: WidgetFamily> Checkbox for ThemedCheckbox<F> {
    fn render(&self) {
        self.sink.render(&format!("A {} checkbox rendering", F::THEME));
    }

    fn theme(&self) -> Theme {
        F::THEME
    }
}

pub type WindowsButton = ThemedButton<Windows>;
pub type WindowsCheckbox = ThemedCheckbox<Windows>;
pub type MacButton = ThemedButton<Mac>;
pub type MacCheckbox = ThemedCheckbox<Mac>;
