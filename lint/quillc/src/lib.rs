//! Quill linter driver.
//!
//! Loads the JSON configuration, finds stylesheets, lints them (in parallel
//! by default) and hands the results to an emitter. The `quill` binary in
//! `main.rs` is a thin argument parser over [`commands`].

pub mod commands;
pub mod config;
pub mod discovery;
pub mod driver;

use std::sync::Once;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use discovery::{discover_stylesheets, Discovered};
pub use driver::{lint_files, lint_source, FileResult};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=quill_lint=debug` or
/// `RUST_LOG=quillc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
