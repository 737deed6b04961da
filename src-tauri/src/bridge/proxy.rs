use std::sync::Arc;

use super::contract::ShortcutBridge;
use crate::error::LaunchError;
use crate::models::{OperationResult, Target};

/// Narrow handle the command layer holds. Forwards the three bridge calls
/// without touching arguments or results.
#[derive(Clone)]
pub struct BridgeClient {
    bridge: Arc<dyn ShortcutBridge>,
}

impl BridgeClient {
    pub fn new(bridge: Arc<dyn ShortcutBridge>) -> Self {
        Self { bridge }
    }

    pub async fn pick_path(&self) -> Option<Target> {
        self.bridge.pick_path().await
    }

    pub async fn launch_target(&self, target: Target) -> Result<OperationResult, LaunchError> {
        self.bridge.launch_target(target).await
    }

    pub async fn set_autostart(&self, enabled: bool) -> OperationResult {
        self.bridge.set_autostart(enabled).await
    }
}
