//! Dashboard page layouts mirroring the prediction templates.

use crate::page::{FakeElement, FakePage};
use fraudguard_ui::config::{DEFAULT_ANCHOR_ID, DEFAULT_FORM_ID, DEFAULT_MODAL_ID};

/// Viewport height used by the fixtures.
pub const VIEWPORT_HEIGHT: f64 = 800.0;

/// Handles into a fixture dashboard page.
#[derive(Clone, Debug)]
pub struct DashboardPage {
    /// The page itself.
    pub page: FakePage,
    /// Scroll-reveal sections, top to bottom.
    pub sections: Vec<FakeElement>,
    /// Prediction modal backdrop.
    pub modal: FakeElement,
    /// Content panel inside the modal.
    pub modal_content: FakeElement,
    /// Close button inside the modal content.
    pub close_button: FakeElement,
    /// Prediction anchor section.
    pub anchor: FakeElement,
    /// Prediction form.
    pub form: FakeElement,
    /// Select controls in the form.
    pub selects: Vec<FakeElement>,
    /// Number inputs in the form.
    pub numbers: Vec<FakeElement>,
    /// Text input that the clear action leaves to the native reset.
    pub note: FakeElement,
    /// Clear button inside the form.
    pub clear_button: FakeElement,
}

/// Build a dashboard page whose modal carries the given inline display value
/// (`None` leaves it unset). Reveal sections sit at the given tops.
#[must_use]
pub fn dashboard_page(modal_display: Option<&str>, section_tops: &[f64]) -> DashboardPage {
    let page = FakePage::new(VIEWPORT_HEIGHT);

    let sections = section_tops
        .iter()
        .map(|&top| page.create("section").attr("data-animate", "").top(top))
        .collect();

    let anchor = page.create("section").id(DEFAULT_ANCHOR_ID);
    let form = anchor.child("form").id(DEFAULT_FORM_ID);
    let selects = vec![
        form.child("select").attr("name", "transaction_type").options(4, 0),
        form.child("select").attr("name", "device").options(3, 1),
    ];
    let numbers = vec![
        form.child("input").attr("name", "amount").input("number", ""),
        form.child("input").attr("name", "hour").input("number", "12"),
    ];
    let note = form.child("input").attr("name", "note").input("text", "");
    let clear_button = form
        .child("button")
        .attr("type", "button")
        .attr("data-form-clear", "");

    let mut modal = page.create("div").id(DEFAULT_MODAL_ID);
    if let Some(display) = modal_display {
        modal = modal.styled_display(display);
    }
    let modal_content = modal.child("div").attr("class", "modal-content");
    let close_button = modal_content.child("span").attr("data-modal-close", "");

    DashboardPage {
        page,
        sections,
        modal,
        modal_content,
        close_button,
        anchor,
        form,
        selects,
        numbers,
        note,
        clear_button,
    }
}

impl DashboardPage {
    /// Fill every control with non-default user input.
    pub fn fill_form(&self) {
        for (offset, select) in (1..).zip(&self.selects) {
            select.choose(offset);
        }
        for (offset, input) in (100..).zip(&self.numbers) {
            input.type_value(&offset.to_string());
        }
        self.note.type_value("suspicious merchant");
    }
}

/// Page with only reveal sections; no modal, form or anchor.
#[must_use]
pub fn bare_page(section_tops: &[f64]) -> (FakePage, Vec<FakeElement>) {
    let page = FakePage::new(VIEWPORT_HEIGHT);
    let sections = section_tops
        .iter()
        .map(|&top| page.create("div").attr("data-animate", "").top(top))
        .collect();
    (page, sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudguard_ui::page::{Page, PageElement};

    #[test]
    fn dashboard_page_wires_expected_ids() {
        let fixture = dashboard_page(Some("block"), &[10.0, 900.0]);
        assert_eq!(fixture.sections.len(), 2);
        assert_eq!(
            fixture.page.element_by_id(DEFAULT_MODAL_ID),
            Some(fixture.modal.clone())
        );
        assert_eq!(fixture.modal.display().as_deref(), Some("block"));
        assert!(fixture.close_button.is_inside(&fixture.modal));
        assert!(fixture.form.is_inside(&fixture.anchor));
        assert!(fixture.clear_button.is_inside(&fixture.form));
    }

    #[test]
    fn fill_form_moves_controls_off_defaults() {
        let fixture = dashboard_page(None, &[]);
        fixture.fill_form();
        assert_eq!(fixture.selects[0].selected_index(), 1);
        assert_eq!(fixture.numbers[1].value(), "101");
        assert_eq!(fixture.note.value(), "suspicious merchant");
        assert!(fixture.modal.display().is_none());
    }

    #[test]
    fn bare_page_has_no_dashboard_elements() {
        let (page, sections) = bare_page(&[0.0]);
        assert_eq!(sections.len(), 1);
        assert!(page.element_by_id(DEFAULT_FORM_ID).is_none());
    }
}
