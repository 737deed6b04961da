use std::path::Path;

use super::LoginItemRegistry;
use crate::error::AutoStartError;

/// Platforms without a login-item mechanism
pub struct UnsupportedLoginItems;

impl LoginItemRegistry for UnsupportedLoginItems {
    fn register(&self, _exe: &Path) -> Result<(), AutoStartError> {
        Err(AutoStartError::Unsupported)
    }

    fn unregister(&self, _exe: &Path) -> Result<(), AutoStartError> {
        Err(AutoStartError::Unsupported)
    }
}
