//! Logging setup for One Shortcut
//! Routes `log` records through tauri-plugin-log and prunes old log files

use log::{info, LevelFilter};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tauri::{plugin::TauriPlugin, Runtime};
use tauri_plugin_log::{Target, TargetKind};

use crate::config::RuntimeMode;

pub const LOG_FILE_NAME: &str = "one-shortcut";
const LOG_RETENTION_DAYS: u64 = 7;
const MAX_LOG_FILE_BYTES: u128 = 5 * 1024 * 1024;

pub fn retention() -> Duration {
    Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60)
}

/// Stdout plus a file in the app log directory.
pub fn plugin<R: Runtime>(mode: RuntimeMode) -> TauriPlugin<R> {
    let level = if mode.is_development() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    tauri_plugin_log::Builder::new()
        .clear_targets()
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir {
                file_name: Some(LOG_FILE_NAME.to_string()),
            }),
        ])
        .level(level)
        .max_file_size(MAX_LOG_FILE_BYTES)
        .build()
}

/// Deletes `.log` files in `logs_dir` last modified more than `retention`
/// before `now`. Returns how many were removed.
pub fn cleanup_old_logs(logs_dir: &Path, retention: Duration, now: SystemTime) -> usize {
    let Ok(entries) = fs::read_dir(logs_dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "log") {
            continue;
        }
        let age = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|modified| now.duration_since(modified).ok());
        if age.map_or(false, |age| age > retention) && fs::remove_file(&path).is_ok() {
            info!("Cleaned up old log: {:?}", path.file_name());
            removed += 1;
        }
    }
    removed
}
