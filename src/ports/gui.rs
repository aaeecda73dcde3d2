use crate::Theme;

#[cfg_attr(test, mockall::automock)]
pub trait Button: Send + Sync {
    fn render(&self);

    fn theme(&self) -> Theme;
}

#[cfg_attr(test, mockall::automock)]
pub trait Checkbox: Send + Sync {
    fn render(&self);

    fn theme(&self) -> Theme;
}

/// Abstract factory for a family of widgets.
///
/// Both creation methods of one implementation return products of the same
/// [`Theme`], the one reported by [`GuiFactory::theme`].
#[cfg_attr(test, mockall::automock)]
pub trait GuiFactory: Send + Sync {
    fn theme(&self) -> Theme;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}
