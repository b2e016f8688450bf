//! Request field validation.
//!
//! Values are passed to asdf as separate argv entries, never through a
//! shell. These checks keep them from being read as flags or from never
//! matching a line of `plugin list` output.

use crate::error::{AsdfError, Result};
use regex::Regex;
use std::sync::LazyLock;

const MAX_NAME_LEN: usize = 256;

static SAFE_PLUGIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._+-]+$").expect("Invalid regex pattern"));

/// Validate a plugin name.
pub fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AsdfError::MalformedRequest(
            "'name' needs to be set.".to_string(),
        ));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(AsdfError::MalformedRequest(format!(
            "'name' too long (max {} chars)",
            MAX_NAME_LEN
        )));
    }

    if name.starts_with('-') {
        return Err(AsdfError::MalformedRequest(format!(
            "'name' cannot start with '-': {}",
            name
        )));
    }

    if !SAFE_PLUGIN_NAME.is_match(name) {
        return Err(AsdfError::MalformedRequest(format!(
            "'name' contains invalid characters: {}",
            name
        )));
    }

    Ok(())
}

pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() || version.starts_with('-') || version.chars().any(char::is_whitespace)
    {
        return Err(AsdfError::MalformedRequest(format!(
            "'version' is not a valid version: {:?}",
            version
        )));
    }
    Ok(())
}
