use crate::core::Reconciliation;
use crate::error::AsdfError;
use serde::Serialize;

pub const SUCCESS_MSG: &str = "Success running module";

/// The single JSON line Ansible reads from stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleResponse {
    pub msg: String,
    pub changed: bool,
    pub failed: bool,
}

impl ModuleResponse {
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            changed: false,
            failed: true,
        }
    }

    /// Failure raised before any external command ran.
    pub fn from_error(err: &AsdfError) -> Self {
        if err.is_request_error() {
            Self::fail(err.to_string())
        } else {
            Self::fail(format!("Error running asdf: {}", err))
        }
    }

    pub fn from_reconciliation(result: &Reconciliation) -> Self {
        match &result.error {
            Some(err) => Self {
                msg: format!("Error running asdf: {}", err),
                changed: result.changed,
                failed: true,
            },
            None => Self {
                msg: SUCCESS_MSG.to_string(),
                changed: result.changed,
                failed: false,
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed { 1 } else { 0 }
    }

    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"msg":"Invalid response object","changed":false,"failed":true}"#.to_string()
        })
    }
}

/// Print the response to stdout and return the process exit code.
pub fn emit(response: &ModuleResponse) -> i32 {
    println!("{}", response.to_json_line());
    response.exit_code()
}
