pub mod asdf;
mod command_exec;
pub mod traits;

pub use asdf::AsdfCli;
pub use traits::PluginManager;
