// This file implements the application's logging system.
// It provides macros for the INFO, WARN, ERROR and DEBUG levels. Every line goes to
// stderr with a colored level tag, so stdout stays reserved for the final sync report.

use colored::Colorize; // Colors the level tags printed by the macros.
use std::sync::OnceLock; // Ensures the DEBUG_ENABLED flag is initialized exactly once.
use std::sync::atomic::{AtomicBool, Ordering}; // Thread-safe control of the debug flag.

/// Provides convenient logging macros.
/// `#[macro_export]` makes these macros globally available within the crate.
/// Call sites need `colored::Colorize` in scope for the level tags.

// `log_info!` for general progress messages.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        eprintln!("{} {}", "[INFO]".bright_green(), format!($($arg)*));
    }};
}

// `log_warn!` for non-critical issues, such as Studio not being discoverable.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        eprintln!("{} {}", "[WARN]".bright_yellow(), format!($($arg)*));
    }};
}

// `log_error!` for failed operations.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        eprintln!("{} {}", "[ERROR]".bright_red(), format!($($arg)*));
    }};
}

// `log_debug!` for detailed internal tracing.
// Messages are only printed if debug mode is enabled via `is_debug_enabled()`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
            eprintln!("{} {}", "[DEBUG]".dimmed(), format!($($arg)*));
        }
    };
}

// Global flag to control debug logging, ensured to be initialized once.
static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Initializes the logger, setting the global debug mode.
/// This function should be called once at application startup.
///
/// # Arguments
/// * `debug`: If `true`, enables debug logging; otherwise only info, warn and error messages are printed.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    log_debug!("Logger initialized in DEBUG mode");
}

/// Checks if debug logging is currently enabled.
/// Used primarily by the `log_debug!` macro.
///
/// # Returns
/// * `true` if debug logging is enabled, `false` otherwise (including when `init` was never called).
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}
