//! fa-catalogue binary entrypoint kept minimal. The engine lives in the library crate.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use fa_catalogue::settings::{Settings, logs_dir};

use crate::args::{Args, determine_log_level, process_args};

struct CatalogueTimer;

impl tracing_subscriber::fmt::time::FormatTime for CatalogueTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialise tracing to `<config>/logs/fa-catalogue.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Filter directive, e.g. `info` or `fa_catalogue=debug`.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_new(level)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    let log_path = logs_dir().join("fa-catalogue.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CatalogueTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: log to stderr so the listing on stdout stays clean
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CatalogueTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() {
    let args = Args::parse();
    let settings = Settings::load();
    let rust_log = std::env::var("RUST_LOG").ok();
    init_logging(&determine_log_level(&args, &settings, rust_log.as_deref()));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fa-catalogue starting");
    match process_args(&args, &settings) {
        Ok(output) => {
            print!("{output}");
            tracing::info!("fa-catalogue exited");
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
