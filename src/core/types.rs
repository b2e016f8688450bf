use crate::error::AsdfError;
use std::fmt;

/// Version string asdf resolves to the newest available release.
pub const LATEST_VERSION: &str = "latest";

/// State a plugin should end up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesiredState {
    /// Plugin added and the requested version installed
    Present,
    /// Plugin not added
    Absent,
    /// Plugin added with the latest version installed
    Latest,
    /// Unrecognized state text, kept for the error message
    Unknown(String),
}

impl DesiredState {
    /// Case-insensitive parse. Never fails; unknown text becomes `Unknown`.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "present" => Self::Present,
            "absent" => Self::Absent,
            "latest" => Self::Latest,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
            Self::Latest => write!(f, "latest"),
            Self::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// One plugin to reconcile. `name` is the only identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
    pub name: String,
    pub url: Option<String>,
    pub version: String,
    pub state: DesiredState,
    pub set_default: bool,
}

/// Outcome of one reconciliation.
///
/// `changed` can be true together with an error: the install path reports a
/// change as soon as it has attempted a mutating command.
#[derive(Debug)]
pub struct Reconciliation {
    pub changed: bool,
    pub error: Option<AsdfError>,
}

impl Reconciliation {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            error: None,
        }
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            error: None,
        }
    }

    pub fn failed(changed: bool, error: AsdfError) -> Self {
        Self {
            changed,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
