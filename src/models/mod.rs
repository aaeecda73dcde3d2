pub mod config;
pub mod family;
pub mod output;

pub use config::*;
pub use family::*;
pub use output::*;
