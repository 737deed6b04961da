// Shortcut picking and launching commands

use super::bridge_client;
use crate::error::LaunchError;
use crate::models::{OperationResult, Target};
use tauri::AppHandle;

/// Show the native picker; `null` when cancelled
#[tauri::command]
pub async fn pick_path(app: AppHandle) -> Option<String> {
    bridge_client(&app).pick_path().await.map(String::from)
}

/// Open a web URL or filesystem entry with the system handler
#[tauri::command]
pub async fn launch_target(app: AppHandle, target: String) -> Result<OperationResult, LaunchError> {
    bridge_client(&app).launch_target(Target::from(target)).await
}
