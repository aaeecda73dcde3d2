mod console;
mod memory;
mod tracing_sink;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use tracing_sink::TracingSink;
