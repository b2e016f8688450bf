//! Console diagnostics.
//!
//! Stdout belongs to the JSON response, so every line here goes to stderr.

use colored::Colorize;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Disable colors when stderr is not a terminal or `NO_COLOR` is set.
pub fn init_colors() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if is_verbose() {
        eprintln!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if is_verbose() {
        eprintln!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Show an external command line before it runs.
pub fn command(cmdline: &str) {
    if is_verbose() {
        eprintln!("{} {}", "$".bright_black(), cmdline.dimmed());
    }
}
