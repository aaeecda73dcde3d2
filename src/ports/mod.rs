// src/ports/mod.rs

pub use gui::{Button, Checkbox, GuiFactory};
pub use logger::{Logger, LoggerFactory};
pub use output_sink::OutputSink;

pub mod gui;
pub mod logger;
pub mod output_sink;
