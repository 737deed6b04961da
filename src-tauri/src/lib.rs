mod autostart;
mod bridge;
mod commands;
mod config;
mod error;
mod host;
mod logging;
mod models;

pub use autostart::LoginItemRegistry;
pub use bridge::{
    BridgeClient, BridgeFuture, BridgeGateway, ShortcutBridge, PATH_OPENED_MESSAGE,
    URL_OPENED_MESSAGE,
};
pub use config::{BridgeConfig, RuntimeMode};
pub use error::{AutoStartError, LaunchError};
pub use host::{HostFuture, HostServices, PathPicker, TargetOpener};
pub use models::{OperationResult, Target, TargetKind};

use commands::{autostart::set_autostart, launcher::{launch_target, pick_path}};
use log::{info, warn};
use std::sync::Arc;
use std::time::SystemTime;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = BridgeConfig::default();

    let builder = tauri::Builder::default()
        .plugin(logging::plugin(config.mode))
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_autostart::init(
        tauri_plugin_autostart::MacosLauncher::LaunchAgent,
        None,
    ));

    builder
        .setup(move |app| {
            match app.path().app_log_dir() {
                Ok(dir) => {
                    logging::cleanup_old_logs(&dir, logging::retention(), SystemTime::now());
                }
                Err(e) => warn!("Could not resolve log directory: {}", e),
            }

            let mode = config.mode;
            let gateway = BridgeGateway::new(HostServices::from_app(app.handle()), config);
            app.manage(BridgeClient::new(Arc::new(gateway)));

            info!("One Shortcut ready ({:?})", mode);
            Ok(())
        })
        // Keep in sync with build.rs and capabilities/default.json
        .invoke_handler(tauri::generate_handler![
            pick_path,
            launch_target,
            set_autostart
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
