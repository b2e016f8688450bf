use crate::error::Result;

/// Subcommands of an external plugin-based version manager.
///
/// Every method is one blocking child-process call. Mutating methods only
/// report success or failure; `list_plugins` is the one call whose output
/// is interpreted.
pub trait PluginManager {
    /// Raw `plugin list` output, one plugin name per line.
    fn list_plugins(&self) -> Result<String>;

    /// Register `name`, optionally from an explicit repository `url`.
    fn add_plugin(&self, name: &str, url: Option<&str>) -> Result<()>;

    fn install_version(&self, name: &str, version: &str) -> Result<()>;

    /// Make `version` the user-wide default for `name`.
    fn set_global_version(&self, name: &str, version: &str) -> Result<()>;

    fn remove_plugin(&self, name: &str) -> Result<()>;

    /// Whether the manager executable can be found
    fn is_available(&self) -> bool;
}
