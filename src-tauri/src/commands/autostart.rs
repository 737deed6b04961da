use super::bridge_client;
use crate::models::OperationResult;
use tauri::AppHandle;

/// Toggle launch at login; failures come back as `success: false`
#[tauri::command]
pub async fn set_autostart(app: AppHandle, enabled: bool) -> OperationResult {
    bridge_client(&app).set_autostart(enabled).await
}
