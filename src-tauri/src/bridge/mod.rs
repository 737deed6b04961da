//! The privileged bridge between the webview and the OS.
//!
//! [`ShortcutBridge`] is the whole allow-listed surface. [`BridgeGateway`]
//! implements it on top of [`HostServices`](crate::host::HostServices), and
//! [`BridgeClient`] is the only handle the command layer holds.

mod contract;
mod gateway;
mod proxy;

pub use contract::{BridgeFuture, ShortcutBridge};
pub use gateway::{BridgeGateway, PATH_OPENED_MESSAGE, URL_OPENED_MESSAGE};
pub use proxy::BridgeClient;
