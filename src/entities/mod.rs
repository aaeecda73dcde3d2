pub mod loggers;
pub mod run;
pub mod widgets;

pub use loggers::*;
pub use run::*;
pub use widgets::*;
