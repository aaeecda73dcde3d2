//! Runs the GUI and logger demonstrations against the console.
//!
//! ```text
//! creational-demo [config.toml]
//! ```
//!
//! Without a path the demo uses `theme = "Windows"` and
//! `environment = "production"`. Set `RUST_LOG=debug` to see factory
//! selection.

use creational_kit::adapters::ConsoleSink;
use creational_kit::services::DemoService;
use creational_kit::{CreationalError, DemoConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}

fn load_config() -> Result<DemoConfig, CreationalError> {
    match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(path),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let result = load_config()
        .and_then(|config| DemoService::new(config, Arc::new(ConsoleSink::new())).run());

    match result {
        Ok(report) => {
            tracing::debug!(run_id = %report.run_id, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
