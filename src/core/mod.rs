pub mod prober;
pub mod reconciler;
pub mod types;

pub use reconciler::{ensure, ensure_plugin};
pub use types::{DesiredState, PluginSpec, Reconciliation};
