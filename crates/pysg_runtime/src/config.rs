use serde::{Deserialize, Serialize};

use crate::value::BridgeError;

pub const DEFAULT_MODULE: &str = "PySimpleGUIWeb";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Toolkit module imported when the context is initialized.
    pub module: String,
    /// Timeout applied by `Window::read` when set. `None` blocks indefinitely.
    pub read_timeout_ms: Option<u64>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            read_timeout_ms: None,
        }
    }
}

impl GuiConfig {
    pub fn from_json_str(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json).map_err(|e| BridgeError::Custom(format!("Invalid GUI config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = GuiConfig::from_json_str(r#"{ "read_timeout_ms": 250 }"#).expect("valid config");
        assert_eq!(config.module, DEFAULT_MODULE);
        assert_eq!(config.read_timeout_ms, Some(250));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GuiConfig::from_json_str("{ module: }").is_err());
    }
}
