//! JSON output types for machine-readable CLI output.
//!
//! Every command's `--json` mode prints one [`JsonOutput`] envelope on stdout,
//! whether it succeeded or not.

use anyhow::Result;
use serde::Serialize;

use geofx_spec::{BackendError, ValidationError};

/// Error codes for CLI operations.
///
/// These codes are stable. Backend failures pass their own codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Scene file could not be parsed
    pub const SCENE_PARSE: &str = "CLI_002";
    /// Unknown effect type name
    pub const UNKNOWN_EFFECT: &str = "CLI_003";
    /// Invalid `#rrggbb` color argument
    pub const INVALID_COLOR: &str = "CLI_004";
    /// Unknown region level name
    pub const UNKNOWN_LEVEL: &str = "CLI_005";
    /// Invalid `--size` argument
    pub const INVALID_SIZE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "CLI_001", "SHADING_101", "E003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path to the problematic field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// From any backend error, keeping its code.
    pub fn from_backend(err: &dyn BackendError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// Envelope printed by `--json` modes.
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Pretty-prints the envelope to stdout.
    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Prints a single-error failure envelope.
pub fn print_failure(error: JsonError) -> Result<()> {
    JsonOutput::<()>::failure(vec![error]).print()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_envelope_omits_result() {
        let output = JsonOutput::<u32>::failure(vec![JsonError::new(
            error_codes::UNKNOWN_EFFECT,
            "unknown effect type 'glow'",
        )]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "CLI_003");
        assert!(json.get("result").is_none());
        assert!(json["errors"][0].get("path").is_none());
    }

    #[test]
    fn test_success_envelope_omits_errors() {
        let json = serde_json::to_value(JsonOutput::success(7u32)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "result": 7 }));
    }
}
