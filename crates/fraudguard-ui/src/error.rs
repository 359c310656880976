//! # Design
//!
//! - Provide structured, constant-message errors for the page bindings.
//! - Carry context (field, reason, source) in fields rather than in messages.
//! - Missing page elements are not errors; components no-op on them instead.
//! - JavaScript exceptions from individual DOM calls are logged where they occur.

use thiserror::Error;

/// Result type for dashboard UI operations.
pub type UiResult<T> = Result<T, UiError>;

/// Errors produced while configuring or installing the dashboard behaviors.
#[derive(Debug, Error)]
pub enum UiError {
    /// The embedded configuration block was not valid JSON for the config schema.
    #[error("dashboard config parse failure")]
    ConfigParse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A configuration value failed validation.
    #[error("dashboard config invalid")]
    ConfigInvalid {
        /// Field that failed validation.
        field: &'static str,
        /// Reason the value was rejected.
        reason: &'static str,
    },
    /// The host environment exposes no global `window`.
    #[error("browser window unavailable")]
    WindowUnavailable,
    /// The window exposes no `document`.
    #[error("browser document unavailable")]
    DocumentUnavailable,
}

impl UiError {
    /// Config field tied to a validation failure, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_stay_constant() {
        let err = UiError::ConfigInvalid {
            field: "modal_id",
            reason: "must not be empty",
        };
        assert_eq!(err.to_string(), "dashboard config invalid");
        assert_eq!(err.field(), Some("modal_id"));

        let err = UiError::WindowUnavailable;
        assert_eq!(err.to_string(), "browser window unavailable");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn parse_errors_keep_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UiError::ConfigParse { source };
        assert!(std::error::Error::source(&err).is_some());
    }
}
