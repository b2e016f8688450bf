use crate::packages::asdf::DEFAULT_BINARY;
use crate::project_identity::{BINARY_NAME, ENV_BINARY, ENV_VERBOSE};
use clap::Parser;
use clap::builder::FalseyValueParser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = BINARY_NAME,
    about = "Ansible module ensuring the state of an asdf plugin",
    long_about = "Reads module arguments from a JSON file, reconciles the asdf plugin \
                  against them and prints a one-line JSON result on stdout",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    /// JSON file with the module arguments
    #[arg(value_name = "ARGS_FILE")]
    pub args_file: PathBuf,

    /// Log each step and asdf command to stderr
    #[arg(short = 'v', long, env = ENV_VERBOSE, value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// asdf executable name or path
    #[arg(long = "asdf-bin", value_name = "PATH", env = ENV_BINARY, default_value = DEFAULT_BINARY)]
    pub asdf_bin: String,
}

#[cfg(test)]
mod tests;
