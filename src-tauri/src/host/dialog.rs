use log::debug;
use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;
use tokio::sync::oneshot;

use super::{HostFuture, PathPicker};

/// Native picker via `tauri-plugin-dialog`
pub struct TauriPathPicker {
    app: AppHandle,
}

impl TauriPathPicker {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl PathPicker for TauriPathPicker {
    fn pick_paths<'a>(&'a self, title: &'a str) -> HostFuture<'a, Option<Vec<String>>> {
        Box::pin(async move {
            let (tx, rx) = oneshot::channel();
            self.app
                .dialog()
                .file()
                .set_title(title)
                .pick_file(move |picked| {
                    let _ = tx.send(picked);
                });

            match rx.await {
                Ok(Some(path)) => Some(vec![path.to_string()]),
                Ok(None) => None,
                Err(_) => {
                    debug!("Dialog closed without reporting a selection");
                    None
                }
            }
        })
    }
}
