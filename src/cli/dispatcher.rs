//! Module run
//!
//! Turns one parsed invocation into one `ModuleResponse`.

use crate::cli::args::Cli;
use crate::config::ModuleArgs;
use crate::core::{self, DesiredState};
use crate::error::{AsdfError, Result};
use crate::packages::{AsdfCli, PluginManager};
use crate::ui;
use crate::utils::machine_output::ModuleResponse;
use std::path::Path;

/// Run the module for a parsed command line.
pub fn dispatch(args: &Cli) -> ModuleResponse {
    let manager = AsdfCli::new(args.asdf_bin.as_str());
    match run(&args.args_file, &manager) {
        Ok(response) => response,
        Err(e) => {
            ui::error(&e.to_string());
            ModuleResponse::from_error(&e)
        }
    }
}

/// Load the request at `args_file` and reconcile it through `manager`.
pub fn run(args_file: &Path, manager: &dyn PluginManager) -> Result<ModuleResponse> {
    let spec = ModuleArgs::load(args_file)?.into_spec()?;
    ui::info(&format!(
        "Ensuring plugin '{}' is {} (version {})",
        spec.name, spec.state, spec.version
    ));

    let reconciles = !matches!(spec.state, DesiredState::Unknown(_));
    if reconciles && !manager.is_available() {
        return Err(AsdfError::DependencyMissing(
            "asdf executable not found in PATH".to_string(),
        ));
    }

    let result = core::ensure(manager, &spec);
    if let Some(e) = &result.error {
        ui::error(&e.to_string());
    }
    Ok(ModuleResponse::from_reconciliation(&result))
}
