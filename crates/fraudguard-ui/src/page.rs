//! Page surface the dashboard behaviors run against.
//!
//! # Design
//! - Components are generic over [`Page`] so they run unchanged against the
//!   browser DOM and against in-memory fakes in native tests.
//! - Every operation is infallible from the caller's view: lookups return
//!   `None`/empty and mutations on unsuitable elements are no-ops.

/// Form control classification used by the form resetter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// `<select>` element.
    Select,
    /// `<input type="number">`.
    NumberInput,
    /// Any other `<input>` type.
    Input,
    /// Not a form control.
    Other,
}

/// Scroll animation requested when bringing an element into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Animated scroll.
    Smooth,
    /// Jump without animation.
    Instant,
}

/// Element handle exposed by a [`Page`].
///
/// Equality is node identity: two handles are equal when they refer to the same node.
pub trait PageElement: Clone + PartialEq + 'static {
    /// Top edge of the element's bounding box, relative to the viewport.
    fn top_offset(&self) -> f64;

    /// Add (`present = true`) or remove a class token.
    fn set_class(&self, class: &str, present: bool);

    /// Text content of the element and its descendants.
    fn text(&self) -> Option<String>;

    /// Inline `display` style, `None` when unset or empty.
    fn display(&self) -> Option<String>;

    /// Overwrite the inline `display` style.
    fn set_display(&self, value: &str);

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;

    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// Restore a form's controls to their default values.
    ///
    /// Returns `false` when the element is not a form.
    fn reset_form(&self) -> bool;

    /// Classify the element as a form control.
    fn control_kind(&self) -> ControlKind;

    /// Set the selected option index of a `<select>`; no-op for other elements.
    fn set_selected_index(&self, index: i32);

    /// Set the value of an `<input>`; no-op for other elements.
    fn set_value(&self, value: &str);

    /// Scroll the nearest scrollable ancestors so the element is visible.
    fn scroll_into_view(&self, mode: ScrollMode);
}

/// Document and window surface.
pub trait Page {
    /// Element handle type.
    type Element: PageElement;

    /// Inner height of the viewport in CSS pixels.
    fn viewport_height(&self) -> f64;

    /// All document elements matching `selector`, queried fresh.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Element with the given id, if present.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Run `task` once after `delay_ms` milliseconds on the event loop.
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
