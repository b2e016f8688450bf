//! The request file Ansible hands to the module.

use crate::core::types::{DesiredState, LATEST_VERSION, PluginSpec};
use crate::error::{AsdfError, Result};
use crate::utils::sanitize;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_STATE: &str = "present";
pub const DEFAULT_VERSION: &str = LATEST_VERSION;
pub const DEFAULT_SET_DEFAULT: bool = true;

/// Raw module arguments.
///
/// Missing, `null` and empty-string values fall back to:
/// - `state`: `"present"`
/// - `version`: `"latest"`
/// - `default`: `true`
///
/// Keys not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleArgs {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, rename = "default")]
    pub set_default: Option<bool>,
}

impl ModuleArgs {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AsdfError::ArgsFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AsdfError::ArgsFileInvalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply defaults and validate, producing the spec to reconcile.
    pub fn into_spec(self) -> Result<PluginSpec> {
        let name = self.name.unwrap_or_default();
        sanitize::validate_plugin_name(&name)?;

        let state = non_empty(self.state).unwrap_or_else(|| DEFAULT_STATE.to_string());
        let state = DesiredState::parse(&state);
        let version = non_empty(self.version).unwrap_or_else(|| DEFAULT_VERSION.to_string());
        if matches!(state, DesiredState::Present | DesiredState::Latest) {
            sanitize::validate_version(&version)?;
        }

        Ok(PluginSpec {
            name,
            url: non_empty(self.url),
            version,
            state,
            set_default: self.set_default.unwrap_or(DEFAULT_SET_DEFAULT),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests;
