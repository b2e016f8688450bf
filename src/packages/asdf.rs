//! asdf version manager
//!
//! Drives the `asdf` executable through its plugin, install and global
//! subcommands.

use crate::error::Result;
use crate::packages::command_exec::run_checked;
use crate::packages::traits::PluginManager;

pub const DEFAULT_BINARY: &str = "asdf";

pub struct AsdfCli {
    binary: String,
}

impl AsdfCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        run_checked(&self.binary, args)
    }
}

impl PluginManager for AsdfCli {
    fn list_plugins(&self) -> Result<String> {
        self.run(&["plugin", "list"])
    }

    fn add_plugin(&self, name: &str, url: Option<&str>) -> Result<()> {
        match url {
            Some(url) => self.run(&["plugin", "add", name, url])?,
            None => self.run(&["plugin", "add", name])?,
        };
        Ok(())
    }

    fn install_version(&self, name: &str, version: &str) -> Result<()> {
        self.run(&["install", name, version])?;
        Ok(())
    }

    fn set_global_version(&self, name: &str, version: &str) -> Result<()> {
        self.run(&["global", name, version])?;
        Ok(())
    }

    fn remove_plugin(&self, name: &str) -> Result<()> {
        self.run(&["plugin", "remove", name])?;
        Ok(())
    }

    fn is_available(&self) -> bool {
        which::which(&self.binary).is_ok()
    }
}
