pub mod module_args;

pub use module_args::ModuleArgs;
