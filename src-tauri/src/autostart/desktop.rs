use std::path::Path;

use log::{debug, info};
use tauri::AppHandle;
use tauri_plugin_autostart::ManagerExt;

use super::LoginItemRegistry;
use crate::error::AutoStartError;

/// Login items via `tauri-plugin-autostart`: a LaunchAgent on macOS, the
/// `Run` registry key on Windows and an XDG autostart entry on Linux.
///
/// The plugin registers the running executable, which is the same path the
/// gateway resolves and passes in.
pub struct PluginLoginItems {
    app: AppHandle,
}

impl PluginLoginItems {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl LoginItemRegistry for PluginLoginItems {
    fn register(&self, exe: &Path) -> Result<(), AutoStartError> {
        debug!("Registering login item for {:?}", exe);
        self.app
            .autolaunch()
            .enable()
            .map_err(|e| AutoStartError::Registry(e.to_string()))?;
        info!("Login item registered");
        Ok(())
    }

    fn unregister(&self, exe: &Path) -> Result<(), AutoStartError> {
        debug!("Removing login item for {:?}", exe);
        let manager = self.app.autolaunch();
        // Disabling an entry that was never registered fails on some platforms.
        if !manager.is_enabled().unwrap_or(true) {
            return Ok(());
        }
        manager
            .disable()
            .map_err(|e| AutoStartError::Registry(e.to_string()))?;
        info!("Login item removed");
        Ok(())
    }
}
