//! Prediction modal dismissal: timed auto-hide, backdrop click and explicit close.
//!
//! All three paths end in the same effect, writing `display: none`.

use crate::config::DashboardConfig;
use crate::page::{Page, PageElement};
use tracing::debug;

/// Display style of the modal as observed through its inline style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalDisplay {
    /// `display: block`.
    Shown,
    /// `display: none`.
    Hidden,
    /// No inline display value.
    Unset,
    /// Any other inline display value.
    Other(String),
}

impl ModalDisplay {
    /// Classify an inline display value.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Unset,
            Some("block") => Self::Shown,
            Some("none") => Self::Hidden,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Inline style value that produces this state.
    #[must_use]
    pub fn as_style(&self) -> &str {
        match self {
            Self::Shown => "block",
            Self::Hidden => "none",
            Self::Unset => "",
            Self::Other(value) => value,
        }
    }

    /// Only an explicit `block` counts as shown for the auto-dismiss timer.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Hides the prediction modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalDismisser {
    modal_id: String,
    auto_dismiss_ms: u32,
    close_trigger_selector: String,
}

impl ModalDismisser {
    /// Build a dismisser from the page configuration.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            modal_id: config.modal_id.clone(),
            auto_dismiss_ms: config.auto_dismiss_ms,
            close_trigger_selector: config.close_trigger_selector.clone(),
        }
    }

    /// Id of the managed modal.
    #[must_use]
    pub fn modal_id(&self) -> &str {
        &self.modal_id
    }

    /// Current display state, `None` when the page has no modal.
    pub fn state<P: Page>(&self, page: &P) -> Option<ModalDisplay> {
        page.element_by_id(&self.modal_id)
            .map(|modal| ModalDisplay::parse(modal.display().as_deref()))
    }

    /// Schedule the timed hide when the modal is shown at load.
    ///
    /// Returns `true` when a timer was armed.
    pub fn arm_auto_dismiss<P: Page>(&self, page: &P) -> bool {
        let Some(modal) = page.element_by_id(&self.modal_id) else {
            debug!(modal_id = %self.modal_id, "no modal on page; auto-dismiss skipped");
            return false;
        };
        if !ModalDisplay::parse(modal.display().as_deref()).is_shown() {
            return false;
        }
        debug!(delay_ms = self.auto_dismiss_ms, "modal auto-dismiss armed");
        page.set_timeout(self.auto_dismiss_ms, Box::new(move || hide(&modal)));
        true
    }

    /// React to a page click; hides the modal only when the click landed on the
    /// modal element itself (its backdrop), not on its content.
    ///
    /// Returns `true` when the modal was hidden.
    pub fn handle_click<P: Page>(&self, page: &P, target: Option<&P::Element>) -> bool {
        let Some(target) = target else {
            return false;
        };
        match page.element_by_id(&self.modal_id) {
            Some(modal) if modal == *target => {
                hide(&modal);
                true
            }
            _ => false,
        }
    }

    /// Hide the modal unconditionally; already hidden or absent is a no-op.
    pub fn close<P: Page>(&self, page: &P) {
        match page.element_by_id(&self.modal_id) {
            Some(modal) => hide(&modal),
            None => debug!(modal_id = %self.modal_id, "no modal on page; close skipped"),
        }
    }

    /// React to a page click on, or inside, a close trigger that sits in the
    /// modal. Triggers are resolved from the click target, so content added
    /// after load works too.
    ///
    /// Returns `true` when the modal was hidden.
    pub fn handle_trigger_click<P: Page>(&self, page: &P, target: &P::Element) -> bool {
        let Some(trigger) = target.closest(&self.close_trigger_selector) else {
            return false;
        };
        match page.element_by_id(&self.modal_id) {
            Some(modal) if modal.contains(&trigger) => {
                hide(&modal);
                true
            }
            _ => false,
        }
    }

    /// Close triggers currently inside the modal.
    pub fn close_triggers<P: Page>(&self, page: &P) -> Vec<P::Element> {
        page.element_by_id(&self.modal_id)
            .map(|modal| modal.query_all(&self.close_trigger_selector))
            .unwrap_or_default()
    }
}

fn hide<E: PageElement>(modal: &E) {
    modal.set_display(ModalDisplay::Hidden.as_style());
}
