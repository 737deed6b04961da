// Error types surfaced by the bridge

use serde::{Serialize, Serializer};

/// The OS could not open a launch target.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LaunchError {
    #[error("Failed to open URL: {0}")]
    Url(String),
    #[error("Failed to open path: {0}")]
    Path(String),
}

// Crosses IPC as its message so the front end's promise rejects with it.
impl Serialize for LaunchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// The OS could not register or remove the login item.
///
/// Never sent to the front end; `set_autostart` folds it into an
/// [`OperationResult`](crate::models::OperationResult).
#[derive(Debug, thiserror::Error)]
pub enum AutoStartError {
    #[error("could not resolve current executable: {0}")]
    CurrentExe(#[from] std::io::Error),
    #[error("{0}")]
    Registry(String),
    #[error("autostart is not supported on this platform")]
    Unsupported,
}
