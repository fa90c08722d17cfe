//! Log setup for the generation pipeline.
//!
//! Events go to a file, never to the terminal: stdout carries emitted
//! artifacts and stderr carries user-facing warnings, so tracing output must
//! not interleave with either.

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILE: &str = "brandscale.log";

/// Where and how verbosely the pipeline logs.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub file: PathBuf,
    /// Level directive for this crate's events: trace, debug, info, warn,
    /// error. Dependencies stay quiet unless `RUST_LOG` says otherwise.
    pub level: String,
}

impl LogOptions {
    pub fn new(file: Option<&Path>, level: &str) -> Self {
        Self {
            file: file.map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), Path::to_path_buf),
            level: level.to_string(),
        }
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::new(None, "info")
    }
}

/// Install the file-backed tracing subscriber.
///
/// The returned guard owns the background writer; hold it for the life of
/// the process or trailing events are lost.
pub fn init(options: &LogOptions) -> WorkerGuard {
    let directory = options.file.parent().unwrap_or(Path::new("."));
    let filename = options
        .file
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, filename));

    // RUST_LOG wins when set; otherwise only this crate logs, at the
    // requested level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("brandscale={}", options.level)))
        .unwrap_or_else(|_| EnvFilter::new("brandscale=info"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    // Span timings are only worth their overhead while debugging.
    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %options.file.display(),
        "brandscale logging initialized"
    );

    guard
}
