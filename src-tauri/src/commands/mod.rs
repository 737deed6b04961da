// Tauri command handlers - one file per domain
pub mod autostart;
pub mod launcher;

use crate::bridge::BridgeClient;
use tauri::{AppHandle, Manager};

/// The only route from a command handler to the OS.
fn bridge_client(app: &AppHandle) -> BridgeClient {
    app.state::<BridgeClient>().inner().clone()
}
