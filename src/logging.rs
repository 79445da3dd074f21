//! Diagnostic logging to a per-process file.
//!
//! The driver talks to the visitor over stdout, so nothing is logged unless
//! a destination is configured.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file; overrides `[logging] file`.
pub const LOG_ENV_VAR: &str = "FELINE_SHOWCASE_LOG";

/// Install the global subscriber if a log destination is configured.
///
/// `RUST_LOG` wins over `[logging] level`. Each process writes to
/// `{base}.{timestamp}.{pid}` so concurrent sessions never share a file.
/// Returns the file actually opened.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let base = log_base(std::env::var_os(LOG_ENV_VAR), config)?;
    let path = unique_log_path(&base);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Warning: Failed to create log directory {}: {}", parent.display(), e);
            return None;
        }
    }

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(level_filter(&config.level))
        .with(file_layer)
        .init();

    Some(path)
}

fn log_base(env: Option<OsString>, config: &LoggingConfig) -> Option<PathBuf> {
    env.filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn unique_log_path(base: &Path) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, std::process::id()));
    PathBuf::from(name)
}
