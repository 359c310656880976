//! Prediction form clearing.

use crate::config::DashboardConfig;
use crate::page::{ControlKind, Page, PageElement, ScrollMode};
use tracing::debug;

/// Outcome of a clear action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Whether the form was found and natively reset.
    pub form_reset: bool,
    /// Selects forced back to their first option.
    pub selects_reset: usize,
    /// Number inputs blanked.
    pub numbers_cleared: usize,
    /// Whether the anchor was scrolled into view.
    pub scrolled: bool,
}

/// Resets the prediction form and scrolls back to its anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormResetter {
    form_id: String,
    anchor_id: String,
    trigger_selector: String,
}

impl FormResetter {
    /// Build a resetter from the page configuration.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            form_id: config.form_id.clone(),
            anchor_id: config.anchor_id.clone(),
            trigger_selector: config.clear_trigger_selector.clone(),
        }
    }

    /// Whether a click on `target` lands on, or inside, a clear trigger.
    pub fn is_trigger<E: PageElement>(&self, target: &E) -> bool {
        target.closest(&self.trigger_selector).is_some()
    }

    /// Clear triggers currently on the page.
    pub fn triggers<P: Page>(&self, page: &P) -> Vec<P::Element> {
        page.query_all(&self.trigger_selector)
    }

    /// Reset every control, then force selects to index 0 and blank number
    /// inputs, since a native reset restores declared defaults rather than
    /// clearing them. Finally scroll the anchor into view.
    pub fn clear<P: Page>(&self, page: &P) -> ClearReport {
        let mut report = ClearReport::default();

        if let Some(form) = page.element_by_id(&self.form_id) {
            report.form_reset = form.reset_form();
            for select in form.query_all("select") {
                select.set_selected_index(0);
                report.selects_reset += 1;
            }
            for input in form.query_all("input") {
                if input.control_kind() == ControlKind::NumberInput {
                    input.set_value("");
                    report.numbers_cleared += 1;
                }
            }
        } else {
            debug!(form_id = %self.form_id, "no form on page; reset skipped");
        }

        if let Some(anchor) = page.element_by_id(&self.anchor_id) {
            anchor.scroll_into_view(ScrollMode::Smooth);
            report.scrolled = true;
        } else {
            debug!(anchor_id = %self.anchor_id, "no anchor on page; scroll skipped");
        }

        report
    }
}
