// Trusted implementation of the bridge operations

use log::{error, info, warn};

use super::contract::{BridgeFuture, ShortcutBridge};
use crate::config::BridgeConfig;
use crate::error::{AutoStartError, LaunchError};
use crate::host::HostServices;
use crate::models::{OperationResult, Target, TargetKind};

pub const URL_OPENED_MESSAGE: &str = "Web URL opened in browser.";
pub const PATH_OPENED_MESSAGE: &str = "Path opened successfully.";

/// Issues the OS calls behind each bridge operation. Holds no mutable state,
/// so concurrent calls never coordinate.
pub struct BridgeGateway {
    host: HostServices,
    config: BridgeConfig,
}

impl BridgeGateway {
    pub fn new(host: HostServices, config: BridgeConfig) -> Self {
        Self { host, config }
    }

    async fn pick(&self) -> Option<Target> {
        let picked = self.host.picker.pick_paths(&self.config.dialog_title).await?;
        picked.into_iter().next().map(Target::from)
    }

    async fn launch(&self, target: Target) -> Result<OperationResult, LaunchError> {
        match target.kind() {
            TargetKind::WebUrl => self.launch_url(target.as_str()).await,
            TargetKind::Path => self.launch_path(target.as_str()).await,
        }
    }

    async fn launch_url(&self, url: &str) -> Result<OperationResult, LaunchError> {
        match self.host.opener.open_url(url).await {
            Ok(()) => {
                info!("Opened URL in browser: {}", url);
                Ok(OperationResult::ok(URL_OPENED_MESSAGE))
            }
            Err(e) => {
                error!("Failed to open URL {}: {}", url, e);
                Err(LaunchError::Url(e))
            }
        }
    }

    async fn launch_path(&self, path: &str) -> Result<OperationResult, LaunchError> {
        // An empty diagnostic means the handler accepted the path.
        let failure = match self.host.opener.open_path(path).await {
            Ok(diagnostic) if diagnostic.is_empty() => None,
            Ok(diagnostic) => Some(diagnostic),
            Err(e) => Some(e),
        };

        match failure {
            None => {
                info!("Opened path: {}", path);
                Ok(OperationResult::ok(PATH_OPENED_MESSAGE))
            }
            Some(message) => {
                error!("Failed to open path {}: {}", path, message);
                Err(LaunchError::Path(message))
            }
        }
    }

    fn apply_autostart(&self, enabled: bool) -> OperationResult {
        info!("Setting auto-start to: {}", enabled);
        if self.config.mode.is_development() {
            warn!("Auto-start setting is being set in development mode. This may not work correctly until the app is packaged.");
        }

        match self.update_login_item(enabled) {
            Ok(()) => OperationResult::ok(format!("Auto-start set to {}", enabled)),
            Err(e) => {
                error!("Failed to set auto-start: {}", e);
                OperationResult::failed(format!("Failed to set auto-start: {}", e))
            }
        }
    }

    fn update_login_item(&self, enabled: bool) -> Result<(), AutoStartError> {
        let exe = std::env::current_exe()?;
        if enabled {
            self.host.login_items.register(&exe)
        } else {
            self.host.login_items.unregister(&exe)
        }
    }
}

impl ShortcutBridge for BridgeGateway {
    fn pick_path(&self) -> BridgeFuture<'_, Option<Target>> {
        Box::pin(self.pick())
    }

    fn launch_target(&self, target: Target) -> BridgeFuture<'_, Result<OperationResult, LaunchError>> {
        Box::pin(self.launch(target))
    }

    fn set_autostart(&self, enabled: bool) -> BridgeFuture<'_, OperationResult> {
        let result = self.apply_autostart(enabled);
        Box::pin(async move { result })
    }
}
