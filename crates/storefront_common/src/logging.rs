//! Logging utilities for the storefront backend.
//!
//! This module provides the one place where the tracing subscriber is set up.
//! All crates log through the `tracing` macros directly.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use storefront_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured first; the storefront crates are then raised to
/// `level` on top of it.
///
/// # Arguments
///
/// * `level` - The minimum log level to display for storefront crates.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("storefront={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    // Use try_init to handle the case where a global default subscriber has already been set
    let result = tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_thread_names(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
