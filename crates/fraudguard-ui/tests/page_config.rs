//! Loading the dashboard configuration from the page.

use fraudguard_test_support::fixtures::{VIEWPORT_HEIGHT, bare_page};
use fraudguard_test_support::page::FakePage;
use fraudguard_ui::config::{CONFIG_ELEMENT_ID, DashboardConfig};
use fraudguard_ui::dashboard::load_config;
use fraudguard_ui::{Dashboard, UiError};

#[test]
fn absent_block_yields_defaults() {
    let (page, _) = bare_page(&[]);
    assert_eq!(load_config(&page).expect("defaults"), DashboardConfig::default());
}

#[test]
fn blank_block_yields_defaults() {
    let page = FakePage::new(VIEWPORT_HEIGHT);
    let _block = page.create("script").id(CONFIG_ELEMENT_ID).text_content("  \n ");
    assert_eq!(load_config(&page).expect("defaults"), DashboardConfig::default());
}

#[test]
fn overrides_reach_the_behaviors() {
    let page = FakePage::new(VIEWPORT_HEIGHT);
    let _block = page.create("script").id(CONFIG_ELEMENT_ID).text_content(
        r#"{"modal_id": "resultModal", "auto_dismiss_ms": 1000, "reveal_margin": 0}"#,
    );
    let modal = page.create("div").id("resultModal").styled_display("block");
    let section = page.create("div").attr("data-animate", "").top(750.0);

    let dashboard = Dashboard::from_page(&page).expect("config loads");
    assert_eq!(dashboard.dismisser().modal_id(), "resultModal");
    let report = dashboard.on_load(&page);
    assert!(report.auto_dismiss_armed);
    assert!(section.has_class("visible"));

    page.advance(1_000);
    assert_eq!(
        fraudguard_ui::page::PageElement::display(&modal).as_deref(),
        Some("none")
    );
}

#[test]
fn trigger_selectors_can_be_overridden() {
    let page = FakePage::new(VIEWPORT_HEIGHT);
    let _block = page.create("script").id(CONFIG_ELEMENT_ID).text_content(
        r##"{"close_trigger_selector": ".close", "clear_trigger_selector": "#clearButton"}"##,
    );
    let form = page.create("form").id("predictionForm");
    let clear = form.child("button").id("clearButton");
    let default_clear = form.child("button").attr("data-form-clear", "");

    let dashboard = Dashboard::from_page(&page).expect("config loads");
    assert_eq!(dashboard.clear_triggers(&page), vec![clear.clone()]);
    assert!(dashboard.on_click(&page, Some(&clear)).is_trigger());
    assert!(!dashboard.on_click(&page, Some(&default_clear)).is_trigger());
}

#[test]
fn malformed_block_is_reported() {
    let page = FakePage::new(VIEWPORT_HEIGHT);
    let _block = page
        .create("script")
        .id(CONFIG_ELEMENT_ID)
        .text_content("{not json");
    assert!(matches!(
        Dashboard::from_page(&page),
        Err(UiError::ConfigParse { .. })
    ));
}

#[test]
fn invalid_values_are_reported() {
    let page = FakePage::new(VIEWPORT_HEIGHT);
    let _block = page
        .create("script")
        .id(CONFIG_ELEMENT_ID)
        .text_content(r#"{"form_id": ""}"#);
    let err = load_config(&page).unwrap_err();
    assert_eq!(err.field(), Some("form_id"));
}
