//! Error types for effect parameters, scene validation and backend reporting.

use thiserror::Error;

/// Error codes for scene validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported scene_version
    UnsupportedSceneVersion,
    /// E002: Resolution is zero or too large
    InvalidResolution,
    /// E003: Scene declares no layers
    NoLayers,
    /// E004: A layer's effect parameters are invalid
    InvalidLayerParams,
    /// E005: Scene time is not finite
    NonFiniteTime,
    /// E006: Background color is not a valid RGB triple
    InvalidBackground,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSceneVersion => "E001",
            ErrorCode::InvalidResolution => "E002",
            ErrorCode::NoLayers => "E003",
            ErrorCode::InvalidLayerParams => "E004",
            ErrorCode::NonFiniteTime => "E005",
            ErrorCode::InvalidBackground => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "layers\[0\].color").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of scene validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Errors raised when effect parameters are rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// A color channel is NaN or infinite.
    #[error("{field} has a non-finite channel")]
    NonFiniteColor { field: &'static str },

    /// A color channel is outside [0, 1].
    #[error("{field} channel {channel} is {value}, expected a value in [0, 1]")]
    ColorOutOfRange {
        field: &'static str,
        channel: usize,
        value: f64,
    },

    /// A scalar that must be strictly positive and finite is not.
    #[error("{field} must be finite and > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// The effect name does not match any known effect type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown effect type '{0}' (expected side, terrain, bar, ground or gear)")]
pub struct UnknownEffectType(pub String);

/// Top-level error type for scene file operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Scene validation failed with one or more errors.
    #[error("scene validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so callers can report a
/// stable code and category regardless of which backend failed.
///
/// # Example
///
/// ```ignore
/// use geofx_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting, like "SHADING_001" or "DATA_002".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnsupportedSceneVersion.code(), "E001");
        assert_eq!(ErrorCode::InvalidResolution.code(), "E002");
        assert_eq!(ErrorCode::InvalidLayerParams.code(), "E004");
        assert_eq!(ErrorCode::InvalidBackground.code(), "E006");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::NoLayers, "scene has no layers");
        assert_eq!(err.to_string(), "E003: scene has no layers");

        let err_with_path = ValidationError::with_path(
            ErrorCode::InvalidLayerParams,
            "depth must be finite and > 0, got 0",
            "layers[1].depth",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E004: depth must be finite and > 0, got 0 (at layers[1].depth)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::default();
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::NoLayers, "no layers"));
        assert!(!result.is_ok());
        assert_eq!(result.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_params_error_display() {
        let err = ParamsError::ColorOutOfRange {
            field: "color",
            channel: 2,
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "color channel 2 is 1.5, expected a value in [0, 1]"
        );
    }
}
