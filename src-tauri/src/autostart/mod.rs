//! Login-item registration, one implementation per platform family.

use std::path::Path;

use tauri::AppHandle;

use crate::error::AutoStartError;

/// OS registry of applications launched at user login.
pub trait LoginItemRegistry: Send + Sync {
    /// Launch `exe` at login.
    fn register(&self, exe: &Path) -> Result<(), AutoStartError>;

    /// Stop launching `exe` at login. Removing a missing entry is not an error.
    fn unregister(&self, exe: &Path) -> Result<(), AutoStartError>;
}

pub fn platform_registry(app: &AppHandle) -> Box<dyn LoginItemRegistry> {
    #[cfg(desktop)]
    return Box::new(desktop::PluginLoginItems::new(app.clone()));
    #[cfg(mobile)]
    {
        let _ = app;
        Box::new(unsupported::UnsupportedLoginItems)
    }
}

#[cfg(desktop)]
pub mod desktop;
#[cfg(mobile)]
pub mod unsupported;
