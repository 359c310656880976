//! Browser bindings: `web-sys` page implementation, listener registration and
//! the `window` functions templates call from `onclick` attributes.

use crate::dashboard::Dashboard;
use crate::error::{UiError, UiResult};
use crate::page::{ControlKind, Page, PageElement, ScrollMode};
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use tracing::info;
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Node,
    NodeList, ScrollBehavior, ScrollIntoViewOptions, Window,
};

/// Live browser document.
#[derive(Clone, Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Attach to the current window and document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::WindowUnavailable`] or [`UiError::DocumentUnavailable`]
    /// outside a browsing context.
    pub fn current() -> UiResult<Self> {
        let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
        let document = window.document().ok_or(UiError::DocumentUnavailable)?;
        Ok(Self { window, document })
    }

    fn loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }
}

/// Element handle over a `web_sys::Element`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(Element);

impl WebElement {
    /// Underlying DOM element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl PageElement for WebElement {
    fn top_offset(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn set_class(&self, class: &str, present: bool) {
        let list = self.0.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(err) = result {
            report_js("class_list", &err);
        }
    }

    fn text(&self) -> Option<String> {
        self.0.text_content()
    }

    fn display(&self) -> Option<String> {
        let value = self
            .html()?
            .style()
            .get_property_value("display")
            .map_err(|err| report_js("style.get_property_value", &err))
            .ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_display(&self, value: &str) {
        if let Some(html) = self.html() {
            if let Err(err) = html.style().set_property("display", value) {
                report_js("style.set_property", &err);
            }
        }
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0
            .closest(selector)
            .map_err(|err| report_js("element.closest", &err))
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn contains(&self, other: &Self) -> bool {
        let node: &Node = &other.0;
        self.0.contains(Some(node))
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        collect(self.0.query_selector_all(selector), "element.query_selector_all")
    }

    fn reset_form(&self) -> bool {
        self.0
            .dyn_ref::<HtmlFormElement>()
            .map(HtmlFormElement::reset)
            .is_some()
    }

    fn control_kind(&self) -> ControlKind {
        if self.0.dyn_ref::<HtmlSelectElement>().is_some() {
            return ControlKind::Select;
        }
        match self.0.dyn_ref::<HtmlInputElement>() {
            Some(input) if input.type_() == "number" => ControlKind::NumberInput,
            Some(_) => ControlKind::Input,
            None => ControlKind::Other,
        }
    }

    fn set_selected_index(&self, index: i32) {
        if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_selected_index(index);
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn scroll_into_view(&self, mode: ScrollMode) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .map_err(|err| report_js("window.inner_height", &err))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default()
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        collect(
            self.document.query_selector_all(selector),
            "document.query_selector_all",
        )
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

fn collect(list: Result<NodeList, JsValue>, operation: &'static str) -> Vec<WebElement> {
    match list {
        Ok(nodes) => (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect(),
        Err(err) => {
            report_js(operation, &err);
            Vec::new()
        }
    }
}

fn report_js(operation: &'static str, err: &JsValue) {
    console::error!("dom operation failed", operation, err.clone());
}

/// Listeners registered for the dashboard; dropping the value unregisters them.
#[derive(Debug)]
pub struct DashboardBindings {
    listeners: Vec<EventListener>,
}

impl DashboardBindings {
    /// Register load, scroll and click listeners with `addEventListener`,
    /// leaving any handlers the page already set intact. Close and clear
    /// triggers are resolved per click from the event target.
    #[must_use]
    pub fn install(page: &WebPage, dashboard: Dashboard) -> Self {
        let page = Rc::new(page.clone());
        let dashboard = Rc::new(dashboard);
        let mut listeners = Vec::new();

        if page.loaded() {
            dashboard.on_load(&*page);
        } else {
            let (page, dashboard) = (Rc::clone(&page), Rc::clone(&dashboard));
            let window = page.window.clone();
            listeners.push(EventListener::once(&window, "load", move |_event| {
                dashboard.on_load(&*page);
            }));
        }

        {
            let (page, dashboard) = (Rc::clone(&page), Rc::clone(&dashboard));
            let window = page.window.clone();
            listeners.push(EventListener::new(&window, "scroll", move |_event| {
                dashboard.on_scroll(&*page);
            }));
        }

        {
            let (page, dashboard) = (Rc::clone(&page), Rc::clone(&dashboard));
            let window = page.window.clone();
            listeners.push(EventListener::new(&window, "click", move |event| {
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .map(WebElement);
                // Clear buttons inside the form would otherwise submit it.
                if dashboard.on_click(&*page, target.as_ref()).is_trigger() {
                    event.prevent_default();
                }
            }));
        }

        info!(
            listeners = listeners.len(),
            close_triggers = dashboard.close_triggers(&*page).len(),
            clear_triggers = dashboard.clear_triggers(&*page).len(),
            "dashboard bindings installed"
        );
        Self { listeners }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Keep every listener registered for the lifetime of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

fn dashboard_for(page: &WebPage) -> Dashboard {
    Dashboard::from_page(page).unwrap_or_else(|err| {
        console::error!("dashboard config rejected; using defaults", err.to_string());
        Dashboard::default()
    })
}

fn with_page(action: impl FnOnce(&WebPage)) {
    match WebPage::current() {
        Ok(page) => action(&page),
        Err(err) => console::error!("dashboard page unavailable", err.to_string()),
    }
}

/// Functions published on `window` for template `onclick` attributes.
const WINDOW_FUNCTIONS: [(&str, fn()); 3] = [
    ("closeModal", close_modal),
    ("clearForm", clear_form),
    ("revealOnScroll", reveal_on_scroll),
];

fn init_tracing() {
    let max_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(max_level)
            .set_report_logs_in_timings(false)
            .build(),
    );
}

fn publish_window_functions(page: &WebPage) {
    for (name, function) in WINDOW_FUNCTIONS {
        let callback = Closure::<dyn Fn()>::new(function);
        if let Err(err) =
            js_sys::Reflect::set(&page.window, &JsValue::from_str(name), callback.as_ref())
        {
            report_js("window.define_function", &err);
        }
        callback.forget();
    }
}

/// Install the dashboard behaviors on the current page for its lifetime.
pub fn run_dashboard() {
    console_error_panic_hook::set_once();
    init_tracing();
    with_page(|page| {
        publish_window_functions(page);
        DashboardBindings::install(page, dashboard_for(page)).forget();
    });
}

/// Hide the prediction modal. Exported for template `onclick` handlers.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_page(|page| dashboard_for(page).close_modal(page));
}

/// Clear the prediction form and scroll back to it. Exported for template `onclick` handlers.
#[wasm_bindgen(js_name = clearForm)]
pub fn clear_form() {
    with_page(|page| {
        dashboard_for(page).clear_form(page);
    });
}

/// Run a reveal pass on demand, e.g. after content is injected.
#[wasm_bindgen(js_name = revealOnScroll)]
pub fn reveal_on_scroll() {
    with_page(|page| {
        dashboard_for(page).on_scroll(page);
    });
}
