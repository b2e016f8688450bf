//! Runtime identity values.

pub const BINARY_NAME: &str = "asdf_plugin";
pub const ENV_VERBOSE: &str = "ASDF_PLUGIN_VERBOSE";
pub const ENV_BINARY: &str = "ASDF_PLUGIN_BIN";
