//! Logging configuration using tracing with file appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing with file output, optionally mirrored to stderr.
///
/// Returns a guard that must be held for the duration of the program to
/// ensure logs are flushed. Dropping the guard flushes remaining logs.
///
/// The stderr mirror is for interactive use (`watch`); the file appender is
/// the durable record the reload path's swallowed errors end up in.
pub fn init_logging(log_path: Option<&Path>, level: Option<&str>, mirror_stderr: bool) -> WorkerGuard {
    let log_path = log_path.unwrap_or(Path::new("huepick-settings.log"));
    let level = level.unwrap_or("info");

    let parent = log_path.parent().unwrap_or(Path::new("."));
    let filename = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("huepick-settings.log"));

    let _ = std::fs::create_dir_all(parent);
    let file_appender = tracing_appender::rolling::never(parent, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_new(format!("huepick_settings={level}"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    let stderr_layer = mirror_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    guard
}
