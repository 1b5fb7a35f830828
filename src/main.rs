mod clipboard;
mod config;
mod constants;
mod demo;
mod host;
mod paths;
mod property;

use bevy::prelude::*;

use constants::{DEFAULT_LOG_FILTER, LOG_FILE_NAME};

/// Open the session log file in debug builds, marking the start of a session
fn open_log_file() -> Option<tracing_appender::rolling::RollingFileAppender> {
    use std::fs::OpenOptions;
    use std::io::Write;

    if !cfg!(debug_assertions) {
        return None;
    }

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new()
        .append(true)
        .open(logs_dir.join(LOG_FILE_NAME))
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    Some(tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME))
}

/// Set up stdout logging, plus a file layer in debug builds
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;

    let mut guard = None;
    let file_layer = open_log_file().map(|appender| {
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);

        // No ANSI colors for file output
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
    });

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}

fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();

    if let Err(e) = paths::ensure_directories() {
        warn!("Failed to create app directories: {}", e);
    }

    let mut app = App::new();
    app.add_plugins(config::ConfigPlugin)
        .add_plugins(clipboard::ModifierClipboardPlugin);

    demo::run(&mut app);
}
