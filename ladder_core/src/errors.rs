//! # Error Types
//!
//! Structured error types for ladder_core. The engine only fails on
//! structurally invalid calls: an unknown registry key, or geometry that
//! would divide by zero in the rung stress check. Out-of-range design values
//! are never errors; they come back as failing findings.
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::errors::{CalcError, CalcResult};
//!
//! fn check_diameter(rung_diameter: f64) -> CalcResult<()> {
//!     if rung_diameter == 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "rung_diameter",
//!             rung_diameter.to_string(),
//!             "Rung diameter must be non-zero",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ladder_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
///
/// Each variant carries enough context for a caller to report the problem
/// back to whoever supplied the parameters.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value makes a calculation undefined
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Standard key is not in the registry
    #[error("Unknown technical standard: {key}")]
    UnknownStandard { key: String },

    /// Material key is not in the registry
    #[error("Unknown material: {key}")]
    UnknownMaterial { key: String },

    /// File I/O error (CLI input/output only)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// The external narrative service did not return a report
    #[error("Narrative report unavailable: {reason}")]
    NarrativeUnavailable { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownStandard error
    pub fn unknown_standard(key: impl Into<String>) -> Self {
        CalcError::UnknownStandard { key: key.into() }
    }

    /// Create an UnknownMaterial error
    pub fn unknown_material(key: impl Into<String>) -> Self {
        CalcError::UnknownMaterial { key: key.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a NarrativeUnavailable error
    pub fn narrative_unavailable(reason: impl Into<String>) -> Self {
        CalcError::NarrativeUnavailable {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownStandard { .. } => "UNKNOWN_STANDARD",
            CalcError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::NarrativeUnavailable { .. } => "NARRATIVE_UNAVAILABLE",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("rung_diameter", "0", "Rung diameter must be non-zero");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_standard("EN131").error_code(), "UNKNOWN_STANDARD");
        assert_eq!(CalcError::unknown_material("Madeira").error_code(), "UNKNOWN_MATERIAL");
        assert_eq!(CalcError::narrative_unavailable("timeout").error_code(), "NARRATIVE_UNAVAILABLE");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_standard("EN131");
        assert_eq!(error.to_string(), "Unknown technical standard: EN131");
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
