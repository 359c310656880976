//! Page wiring configuration: element ids, selectors and timing constants.
//!
//! # Design
//! - Every field has a default matching the stock dashboard templates, so an
//!   absent or partial config block still produces a working page.
//! - Validation rejects values that would make a component silently useless.

use crate::error::{UiError, UiResult};
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "fraudguard-config";

/// Attribute selector for elements eligible for scroll reveal.
pub const DEFAULT_REVEAL_SELECTOR: &str = "[data-animate]";
/// Class added to revealed elements.
pub const DEFAULT_VISIBLE_CLASS: &str = "visible";
/// Distance in CSS pixels above the viewport bottom an element must cross.
pub const DEFAULT_REVEAL_MARGIN: f64 = 100.0;
/// Id of the prediction result modal.
pub const DEFAULT_MODAL_ID: &str = "predictionModal";
/// Delay before a modal shown at load hides itself.
pub const DEFAULT_AUTO_DISMISS_MS: u32 = 5_000;
/// Selector, scoped to the modal, for elements that close it.
pub const DEFAULT_CLOSE_TRIGGER_SELECTOR: &str = "[data-modal-close]";
/// Selector for elements that clear the prediction form when clicked.
pub const DEFAULT_CLEAR_TRIGGER_SELECTOR: &str = "[data-form-clear]";
/// Id of the prediction input form.
pub const DEFAULT_FORM_ID: &str = "predictionForm";
/// Id of the element scrolled into view after the form is cleared.
pub const DEFAULT_ANCHOR_ID: &str = "predict";

/// Runtime configuration for the dashboard behaviors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Selector for reveal-marked elements.
    pub reveal_selector: String,
    /// Class toggled on reveal-marked elements.
    pub visible_class: String,
    /// Margin subtracted from the viewport height for the reveal threshold.
    pub reveal_margin: f64,
    /// Modal element id.
    pub modal_id: String,
    /// Auto-dismiss delay in milliseconds.
    pub auto_dismiss_ms: u32,
    /// Close trigger selector, evaluated inside the modal.
    pub close_trigger_selector: String,
    /// Clear trigger selector, evaluated against the whole page.
    pub clear_trigger_selector: String,
    /// Form element id.
    pub form_id: String,
    /// Anchor element id.
    pub anchor_id: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            reveal_selector: DEFAULT_REVEAL_SELECTOR.to_string(),
            visible_class: DEFAULT_VISIBLE_CLASS.to_string(),
            reveal_margin: DEFAULT_REVEAL_MARGIN,
            modal_id: DEFAULT_MODAL_ID.to_string(),
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
            close_trigger_selector: DEFAULT_CLOSE_TRIGGER_SELECTOR.to_string(),
            clear_trigger_selector: DEFAULT_CLEAR_TRIGGER_SELECTOR.to_string(),
            form_id: DEFAULT_FORM_ID.to_string(),
            anchor_id: DEFAULT_ANCHOR_ID.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigParse`] for malformed JSON or unknown fields and
    /// [`UiError::ConfigInvalid`] when a value fails validation.
    pub fn from_json(raw: &str) -> UiResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| UiError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value leaves its component usable.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigInvalid`] naming the first offending field.
    pub fn validate(&self) -> UiResult<()> {
        let required = [
            ("reveal_selector", &self.reveal_selector),
            ("visible_class", &self.visible_class),
            ("modal_id", &self.modal_id),
            ("close_trigger_selector", &self.close_trigger_selector),
            ("clear_trigger_selector", &self.clear_trigger_selector),
            ("form_id", &self.form_id),
            ("anchor_id", &self.anchor_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(UiError::ConfigInvalid {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        if self.visible_class.contains(char::is_whitespace) {
            return Err(UiError::ConfigInvalid {
                field: "visible_class",
                reason: "must be a single class token",
            });
        }
        if !self.reveal_margin.is_finite() || self.reveal_margin < 0.0 {
            return Err(UiError::ConfigInvalid {
                field: "reveal_margin",
                reason: "must be a finite, non-negative number",
            });
        }
        if self.auto_dismiss_ms == 0 {
            return Err(UiError::ConfigInvalid {
                field: "auto_dismiss_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_templates() {
        let config = DashboardConfig::default();
        assert_eq!(config.reveal_selector, "[data-animate]");
        assert_eq!(config.visible_class, "visible");
        assert!((config.reveal_margin - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.modal_id, "predictionModal");
        assert_eq!(config.auto_dismiss_ms, 5_000);
        assert_eq!(config.close_trigger_selector, "[data-modal-close]");
        assert_eq!(config.clear_trigger_selector, "[data-form-clear]");
        assert_eq!(config.form_id, "predictionForm");
        assert_eq!(config.anchor_id, "predict");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{"auto_dismiss_ms": 2500}"#)
            .expect("partial config parses");
        assert_eq!(config.auto_dismiss_ms, 2_500);
        assert_eq!(config.modal_id, DEFAULT_MODAL_ID);
    }

    #[test]
    fn empty_object_is_default() {
        let config = DashboardConfig::from_json("{}").expect("empty config parses");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = DashboardConfig::from_json(r#"{"modal": "x"}"#).unwrap_err();
        assert!(matches!(err, UiError::ConfigParse { .. }));
    }

    #[test]
    fn invalid_values_name_their_field() {
        let cases = [
            (r#"{"modal_id": "  "}"#, "modal_id"),
            (r#"{"visible_class": "is visible"}"#, "visible_class"),
            (r#"{"reveal_margin": -1.0}"#, "reveal_margin"),
            (r#"{"clear_trigger_selector": ""}"#, "clear_trigger_selector"),
            (r#"{"auto_dismiss_ms": 0}"#, "auto_dismiss_ms"),
        ];
        for (raw, field) in cases {
            let err = DashboardConfig::from_json(raw).unwrap_err();
            assert_eq!(err.field(), Some(field), "{raw}");
        }
    }
}
