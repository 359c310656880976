//! Per-event entry points tying the three page behaviors to a configuration.
//!
//! # Design
//! - The behaviors stay independent; this type only routes page events to them.
//! - Nothing here holds page state, so handlers may be rebuilt per event.

use crate::config::{CONFIG_ELEMENT_ID, DashboardConfig};
use crate::error::UiResult;
use crate::form::{ClearReport, FormResetter};
use crate::modal::ModalDismisser;
use crate::page::{Page, PageElement};
use crate::reveal::{RevealReport, ScrollRevealer};

/// Outcome of the page-load handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Initial reveal pass.
    pub reveal: RevealReport,
    /// Whether the modal auto-dismiss timer was armed.
    pub auto_dismiss_armed: bool,
}

/// What a page click resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Nothing to do.
    Ignored,
    /// Click on the modal backdrop hid the modal.
    Backdrop,
    /// Click on a close trigger inside the modal hid it.
    CloseTrigger,
    /// Click on a clear trigger cleared the form.
    ClearTrigger(ClearReport),
}

impl ClickAction {
    /// Whether the click hit a trigger whose default action should be suppressed.
    #[must_use]
    pub const fn is_trigger(&self) -> bool {
        matches!(self, Self::CloseTrigger | Self::ClearTrigger(_))
    }
}

/// Router from page events to the reveal, modal and form behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    config: DashboardConfig,
    revealer: ScrollRevealer,
    dismisser: ModalDismisser,
    resetter: FormResetter,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl Dashboard {
    /// Build the behaviors from `config`.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            revealer: ScrollRevealer::new(&config),
            dismisser: ModalDismisser::new(&config),
            resetter: FormResetter::new(&config),
            config,
        }
    }

    /// Build from the page's embedded config block, or defaults when it has none.
    ///
    /// # Errors
    ///
    /// Propagates parse and validation failures of a present config block.
    pub fn from_page<P: Page>(page: &P) -> UiResult<Self> {
        load_config(page).map(Self::new)
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Reveal behavior.
    #[must_use]
    pub const fn revealer(&self) -> &ScrollRevealer {
        &self.revealer
    }

    /// Modal behavior.
    #[must_use]
    pub const fn dismisser(&self) -> &ModalDismisser {
        &self.dismisser
    }

    /// Form behavior.
    #[must_use]
    pub const fn resetter(&self) -> &FormResetter {
        &self.resetter
    }

    /// Page `load`: initial reveal pass and auto-dismiss arming.
    pub fn on_load<P: Page>(&self, page: &P) -> LoadReport {
        LoadReport {
            reveal: self.revealer.reveal(page),
            auto_dismiss_armed: self.dismisser.arm_auto_dismiss(page),
        }
    }

    /// Window `scroll`.
    pub fn on_scroll<P: Page>(&self, page: &P) -> RevealReport {
        self.revealer.reveal(page)
    }

    /// Window `click` with the event's target element. Backdrop clicks win
    /// over trigger lookups; triggers are resolved from the target on every
    /// click, so content inserted after load is covered.
    pub fn on_click<P: Page>(&self, page: &P, target: Option<&P::Element>) -> ClickAction {
        let Some(target) = target else {
            return ClickAction::Ignored;
        };
        if self.dismisser.handle_click(page, Some(target)) {
            return ClickAction::Backdrop;
        }
        if self.dismisser.handle_trigger_click(page, target) {
            return ClickAction::CloseTrigger;
        }
        if self.resetter.is_trigger(target) {
            return ClickAction::ClearTrigger(self.resetter.clear(page));
        }
        ClickAction::Ignored
    }

    /// Explicit modal close action.
    pub fn close_modal<P: Page>(&self, page: &P) {
        self.dismisser.close(page);
    }

    /// Explicit form clear action.
    pub fn clear_form<P: Page>(&self, page: &P) -> ClearReport {
        self.resetter.clear(page)
    }

    /// Close triggers currently inside the modal.
    pub fn close_triggers<P: Page>(&self, page: &P) -> Vec<P::Element> {
        self.dismisser.close_triggers(page)
    }

    /// Clear triggers currently on the page.
    pub fn clear_triggers<P: Page>(&self, page: &P) -> Vec<P::Element> {
        self.resetter.triggers(page)
    }
}

/// Read the config block with id [`CONFIG_ELEMENT_ID`]; defaults when absent or blank.
///
/// # Errors
///
/// Propagates parse and validation failures of a present block.
pub fn load_config<P: Page>(page: &P) -> UiResult<DashboardConfig> {
    let raw = page
        .element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text())
        .filter(|text| !text.trim().is_empty());
    match raw {
        Some(raw) => DashboardConfig::from_json(&raw),
        None => Ok(DashboardConfig::default()),
    }
}
