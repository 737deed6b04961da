use std::{future::Future, pin::Pin};

use crate::error::LaunchError;
use crate::models::{OperationResult, Target};

/// Object-safe boxed future used by [`ShortcutBridge`].
pub type BridgeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Operations the untrusted front end may request. Nothing else crosses the
/// boundary.
pub trait ShortcutBridge: Send + Sync {
    /// Shows the native picker and returns the first selected path, or `None`
    /// when the user cancels.
    fn pick_path(&self) -> BridgeFuture<'_, Option<Target>>;

    /// Opens a web URL in the browser or a filesystem entry with its default
    /// handler. One attempt, no retries.
    fn launch_target(&self, target: Target) -> BridgeFuture<'_, Result<OperationResult, LaunchError>>;

    /// Registers or removes this application as a login item. Failures are
    /// reported in the result, never raised.
    fn set_autostart(&self, enabled: bool) -> BridgeFuture<'_, OperationResult>;
}
