// Runtime configuration for the bridge

pub const DIALOG_TITLE: &str = "Select a file, app, or executable";

/// Whether the app is running from a dev build or a packaged build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Debug builds (`tauri dev`) count as development.
    pub fn detect() -> Self {
        if cfg!(debug_assertions) {
            RuntimeMode::Development
        } else {
            RuntimeMode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub dialog_title: String,
    pub mode: RuntimeMode,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            dialog_title: DIALOG_TITLE.to_string(),
            mode: RuntimeMode::detect(),
        }
    }
}
