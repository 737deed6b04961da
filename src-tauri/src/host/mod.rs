//! Host-service contracts for the OS facilities the bridge calls into.
//!
//! The gateway only sees these traits. Tauri-backed adapters live in the
//! submodules; tests substitute in-memory fakes.

mod dialog;
mod opener;

use std::{future::Future, pin::Pin};

use crate::autostart::LoginItemRegistry;

pub use dialog::TauriPathPicker;
pub use opener::TauriTargetOpener;

/// Object-safe boxed future used by the host-service traits.
pub type HostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Native file/app selection surface.
pub trait PathPicker: Send + Sync {
    /// Shows the picker. `None` means the user cancelled.
    fn pick_paths<'a>(&'a self, title: &'a str) -> HostFuture<'a, Option<Vec<String>>>;
}

/// OS default-handler launching.
pub trait TargetOpener: Send + Sync {
    /// Opens a web URL in the default browser.
    fn open_url<'a>(&'a self, url: &'a str) -> HostFuture<'a, Result<(), String>>;

    /// Opens a filesystem entry with its registered handler.
    ///
    /// `Ok` carries the handler's diagnostic: empty when the entry was opened,
    /// otherwise the reason it was not. `Err` is any other failure of the call.
    fn open_path<'a>(&'a self, path: &'a str) -> HostFuture<'a, Result<String, String>>;
}

/// The set of OS services a gateway is built from.
pub struct HostServices {
    pub picker: Box<dyn PathPicker>,
    pub opener: Box<dyn TargetOpener>,
    pub login_items: Box<dyn LoginItemRegistry>,
}

impl HostServices {
    /// Services backed by the registered Tauri plugins.
    pub fn from_app(app: &tauri::AppHandle) -> Self {
        Self {
            picker: Box::new(TauriPathPicker::new(app.clone())),
            opener: Box::new(TauriTargetOpener::new(app.clone())),
            login_items: crate::autostart::platform_registry(app),
        }
    }
}
