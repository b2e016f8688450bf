//! Desired-state reconciliation for a single plugin.
//!
//! The install path reports `changed = true` once any mutating command has
//! been attempted, even if it then fails. The removal path reports
//! `changed = false` when `plugin remove` fails. Both conventions are part of
//! the module's output contract.

use crate::core::prober;
use crate::core::types::{DesiredState, LATEST_VERSION, PluginSpec, Reconciliation};
use crate::error::AsdfError;
use crate::packages::PluginManager;
use crate::ui;

/// Bring the manager in line with `spec`.
pub fn ensure(manager: &dyn PluginManager, spec: &PluginSpec) -> Reconciliation {
    match &spec.state {
        // TODO: make Latest install LATEST_VERSION instead of spec.version.
        DesiredState::Present | DesiredState::Latest => ensure_installed(manager, spec),
        DesiredState::Absent => ensure_removed(manager, &spec.name),
        DesiredState::Unknown(raw) => {
            Reconciliation::failed(false, AsdfError::InvalidState(raw.clone()))
        }
    }
}

/// Flat-argument form of [`ensure`], parsing `state` first.
pub fn ensure_plugin(
    manager: &dyn PluginManager,
    name: &str,
    url: Option<&str>,
    state: &str,
    version: &str,
    set_default: bool,
) -> Reconciliation {
    let spec = PluginSpec {
        name: name.to_string(),
        url: url.map(str::to_string),
        version: version.to_string(),
        state: DesiredState::parse(state),
        set_default,
    };
    ensure(manager, &spec)
}

fn ensure_installed(manager: &dyn PluginManager, spec: &PluginSpec) -> Reconciliation {
    match prober::is_installed(manager, &spec.name) {
        Err(e) => return Reconciliation::failed(false, e),
        Ok(true) => {
            ui::info(&format!("Plugin '{}' already installed", spec.name));
            return Reconciliation::unchanged();
        }
        Ok(false) => {}
    }

    ui::info(&format!("Adding plugin '{}'", spec.name));
    if let Err(e) = manager.add_plugin(&spec.name, spec.url.as_deref()) {
        return Reconciliation::failed(true, e);
    }

    ui::info(&format!("Installing {} {}", spec.name, spec.version));
    if let Err(e) = manager.install_version(&spec.name, &spec.version) {
        return Reconciliation::failed(true, e);
    }

    if spec.set_default {
        // Pinned to "latest" regardless of the installed version.
        ui::info(&format!("Setting global {} to {}", spec.name, LATEST_VERSION));
        if let Err(e) = manager.set_global_version(&spec.name, LATEST_VERSION) {
            return Reconciliation::failed(true, e);
        }
    }

    ui::success(&format!("Plugin '{}' installed", spec.name));
    Reconciliation::changed()
}

fn ensure_removed(manager: &dyn PluginManager, name: &str) -> Reconciliation {
    match prober::is_installed(manager, name) {
        Err(e) => return Reconciliation::failed(false, e),
        Ok(false) => {
            ui::info(&format!("Plugin '{}' not installed", name));
            return Reconciliation::unchanged();
        }
        Ok(true) => {}
    }

    ui::info(&format!("Removing plugin '{}'", name));
    if let Err(e) = manager.remove_plugin(name) {
        return Reconciliation::failed(false, e);
    }

    ui::success(&format!("Plugin '{}' removed", name));
    Reconciliation::changed()
}
