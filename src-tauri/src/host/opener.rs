use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

use super::{HostFuture, TargetOpener};

/// System default handlers via `tauri-plugin-opener`
pub struct TauriTargetOpener {
    app: AppHandle,
}

impl TauriTargetOpener {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl TargetOpener for TauriTargetOpener {
    fn open_url<'a>(&'a self, url: &'a str) -> HostFuture<'a, Result<(), String>> {
        let result = self
            .app
            .opener()
            .open_url(url, None::<&str>)
            .map_err(|e| e.to_string());
        Box::pin(async move { result })
    }

    fn open_path<'a>(&'a self, path: &'a str) -> HostFuture<'a, Result<String, String>> {
        // The plugin reports a refused path as an error rather than a
        // diagnostic string, so success is always an empty diagnostic.
        let result = self
            .app
            .opener()
            .open_path(path, None::<&str>)
            .map(|()| String::new())
            .map_err(|e| e.to_string());
        Box::pin(async move { result })
    }
}
