//! Logging initialization

use super::config::{LogConfig, DEFAULT_LOG_FILTER, LOG_FILE_NAME};
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Compact output on stderr, so stdout stays clean for listings. Targets
///   are shown when the filter enables debug output
/// - Optional daily-rotated file log in `STOREFRONT_LOG_DIR` (non-blocking writes)
/// - Panic hook that records panics before the default handler runs
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn init() {
    init_with(&LogConfig::from_env());
}

pub fn init_with(config: &LogConfig) {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.is_debug_enabled())
        .compact();

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory {}: {}", dir.display(), e);
                (None, None)
            }
        },
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if !installed {
        return;
    }

    tracing::debug!(
        log_level = %config.log_level,
        log_file = ?config.log_file(),
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the file writer alive for the lifetime of the program
    if let Some(guard) = guard {
        std::mem::forget(guard);
    }
}

/// Log panics with their location before handing off to the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
