// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LoggingConfig, LoggingLevel};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_PREFIX: &str = "media-picker.log";

const SECS_PER_DAY: u64 = 24 * 60 * 60;

const OUR_CRATES: &[&str] = &[
    "media_picker",
    "picker_types",
    "picker_contracts",
    "picker_service",
];

/// Log to stderr, and to daily files when a directory is configured.
///
/// Stdout is kept for command output.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config.level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let Some(dir) = config.directory.as_deref() else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return;
    };

    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!(
            "media-picker: failed to create log directory {}: {e}",
            dir.display()
        );
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return;
    }

    cleanup_old_logs(dir, config.keep_days);

    let appender = tracing_appender::rolling::daily(dir, LOG_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    // Keep the background writer alive until exit
    let _ = LOG_GUARD.set(guard);
}

/// Other crates at warn, ours at the configured level
fn default_filter(level: LoggingLevel) -> EnvFilter {
    let level = level.as_directive();
    let mut directives = vec!["warn".to_owned()];
    directives.extend(OUR_CRATES.iter().map(|name| format!("{name}={level}")));
    EnvFilter::new(directives.join(","))
}

fn cleanup_old_logs(dir: &Path, keep_days: u64) {
    let retention = Duration::from_secs(keep_days.saturating_mul(SECS_PER_DAY));
    let Some(cutoff) = SystemTime::now().checked_sub(retention) else {
        return;
    };

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }

        // Only touch files created by our rolling appender.
        if !entry.file_name().to_string_lossy().starts_with(LOG_PREFIX) {
            continue;
        }

        let Ok(modified) = entry.metadata().and_then(|metadata| metadata.modified()) else {
            continue;
        };
        if modified >= cutoff {
            continue;
        }

        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("media-picker-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn huge_retention_keeps_everything() {
        let dir = scratch_dir("retention");
        let log = dir.join(format!("{LOG_PREFIX}.2020-01-01"));
        fs::write(&log, "old").expect("write log");

        cleanup_old_logs(&dir, u64::MAX);
        assert!(log.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn cleanup_leaves_other_files() {
        let dir = scratch_dir("foreign");
        let other = dir.join("notes.txt");
        fs::write(&other, "keep").expect("write file");

        cleanup_old_logs(&dir, 0);
        assert!(other.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_filter_names_our_crates() {
        let filter = default_filter(LoggingLevel::Debug).to_string();
        assert!(filter.contains("picker_types=debug"));
        assert!(filter.contains("media_picker=debug"));
    }
}
