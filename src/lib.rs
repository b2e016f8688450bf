pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod packages;
pub mod project_identity;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use utils::machine_output::{self, ModuleResponse};

/// Run the module entrypoint and return the process exit code.
pub fn run_cli() -> i32 {
    ui::init_colors();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return machine_output::emit(&invocation_failure(&e)),
    };
    ui::set_verbose(args.verbose);

    let response = cli::dispatcher::dispatch(&args);
    machine_output::emit(&response)
}

fn invocation_failure(e: &clap::Error) -> ModuleResponse {
    if e.kind() == ErrorKind::MissingRequiredArgument {
        return ModuleResponse::fail("No argument file provided");
    }
    let rendered = e.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    ModuleResponse::fail(format!(
        "Invalid invocation: {}",
        first_line.trim_start_matches("error: ")
    ))
}
