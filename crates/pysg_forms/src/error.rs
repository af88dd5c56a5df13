use pysg_runtime::{BridgeError, Dynamic};

use crate::window::WindowState;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormsError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Malformed {what}: got {got}")]
    Malformed { what: &'static str, got: String },

    #[error("Cannot {operation} a window that is {state}")]
    InvalidState { operation: &'static str, state: WindowState },
}

impl FormsError {
    pub fn malformed(what: &'static str, got: &Dynamic) -> Self {
        FormsError::Malformed {
            what,
            got: got.to_string(),
        }
    }
}
