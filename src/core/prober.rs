//! Installed-state detection.

use crate::error::{AsdfError, Result};
use crate::packages::PluginManager;

/// Answer recorded on `ProbeFailed` when the plugin list cannot be read.
/// Callers propagate the error and never act on this value.
pub const INSTALLED_ON_PROBE_FAILURE: bool = true;

/// Whether `name` appears as an exact line of the manager's plugin list.
pub fn is_installed(manager: &dyn PluginManager, name: &str) -> Result<bool> {
    let listing = match manager.list_plugins() {
        Ok(listing) => listing,
        Err(source) => {
            return Err(AsdfError::ProbeFailed {
                assumed_installed: INSTALLED_ON_PROBE_FAILURE,
                source: Box::new(source),
            });
        }
    };

    Ok(listing.split('\n').any(|plugin| plugin == name))
}
