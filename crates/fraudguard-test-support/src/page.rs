//! In-memory page implementing the dashboard page traits.
//!
//! # Design
//! - One shared node arena per page; element handles are `(arena, index)` pairs,
//!   so handle equality is node identity like a real DOM.
//! - Timers run only when the test advances the simulated clock.
//! - Selectors cover what the dashboard uses: `tag`, `#id`, `.class`, `[attr]`
//!   and comma-separated lists of those. Anything else matches nothing.

use fraudguard_ui::page::{ControlKind, Page, PageElement, ScrollMode};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<usize>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    display: Option<String>,
    top: f64,
    text: Option<String>,
    input_type: Option<String>,
    value: String,
    default_value: String,
    options: usize,
    selected_index: i32,
    default_selected_index: i32,
    scrolls: Vec<ScrollMode>,
}

struct Timer {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Document {
    nodes: Vec<Node>,
    viewport_height: f64,
    now_ms: u64,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl Document {
    fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let mut current = self.nodes[index].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent;
        }
        false
    }

    fn matches(&self, index: usize, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .any(|simple| self.matches_simple(index, simple))
    }

    fn matches_simple(&self, index: usize, selector: &str) -> bool {
        let node = &self.nodes[index];
        if let Some(id) = selector.strip_prefix('#') {
            return node.attributes.get("id").is_some_and(|value| value == id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.contains(class);
        }
        if let Some(attr) = selector
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return node.attributes.contains_key(attr);
        }
        !selector.is_empty()
            && selector.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && node.tag.eq_ignore_ascii_case(selector)
    }
}

/// In-memory page with a simulated clock.
#[derive(Clone)]
pub struct FakePage {
    doc: Rc<RefCell<Document>>,
}

impl fmt::Debug for FakePage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.doc.borrow();
        formatter
            .debug_struct("FakePage")
            .field("nodes", &doc.nodes.len())
            .field("viewport_height", &doc.viewport_height)
            .field("now_ms", &doc.now_ms)
            .field("pending_timers", &doc.timers.len())
            .finish()
    }
}

impl FakePage {
    /// Empty page with the given viewport height.
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            doc: Rc::new(RefCell::new(Document {
                viewport_height,
                ..Document::default()
            })),
        }
    }

    /// Append a top-level element.
    #[must_use]
    pub fn create(&self, tag: &str) -> FakeElement {
        self.insert(tag, None)
    }

    fn insert(&self, tag: &str, parent: Option<usize>) -> FakeElement {
        let mut doc = self.doc.borrow_mut();
        doc.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            parent,
            selected_index: -1,
            default_selected_index: -1,
            ..Node::default()
        });
        FakeElement {
            page: self.clone(),
            index: doc.nodes.len() - 1,
        }
    }

    /// Change the viewport height, as on a window resize.
    pub fn set_viewport_height(&self, height: f64) {
        self.doc.borrow_mut().viewport_height = height;
    }

    /// Simulated milliseconds elapsed since the page was created.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.doc.borrow().now_ms
    }

    /// Timers scheduled but not yet run.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.doc.borrow().timers.len()
    }

    /// Advance the clock by `ms`, running due timers in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.doc.borrow().now_ms + ms;
        loop {
            let task = {
                let mut doc = self.doc.borrow_mut();
                let next = doc
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due_ms <= target)
                    .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
                    .map(|(position, _)| position);
                match next {
                    Some(position) => {
                        let timer = doc.timers.remove(position);
                        doc.now_ms = timer.due_ms;
                        timer.task
                    }
                    None => break,
                }
            };
            task();
        }
        self.doc.borrow_mut().now_ms = target;
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn viewport_height(&self) -> f64 {
        self.doc.borrow().viewport_height
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let doc = self.doc.borrow();
        (0..doc.nodes.len())
            .filter(|&index| doc.matches(index, selector))
            .map(|index| FakeElement {
                page: self.clone(),
                index,
            })
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let doc = self.doc.borrow();
        doc.nodes
            .iter()
            .position(|node| node.attributes.get("id").is_some_and(|value| value == id))
            .map(|index| FakeElement {
                page: self.clone(),
                index,
            })
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut doc = self.doc.borrow_mut();
        let due_ms = doc.now_ms + u64::from(delay_ms);
        let seq = doc.next_seq;
        doc.next_seq += 1;
        doc.timers.push(Timer { due_ms, seq, task });
    }
}

/// Handle to a node of a [`FakePage`].
#[derive(Clone)]
pub struct FakeElement {
    page: FakePage,
    index: usize,
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.page.doc, &other.page.doc) && self.index == other.index
    }
}

impl Eq for FakeElement {}

impl fmt::Debug for FakeElement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|node| {
            formatter
                .debug_struct("FakeElement")
                .field("index", &self.index)
                .field("tag", &node.tag)
                .field("id", &node.attributes.get("id"))
                .finish()
        })
    }
}

impl FakeElement {
    fn with<T>(&self, read: impl FnOnce(&Node) -> T) -> T {
        read(&self.page.doc.borrow().nodes[self.index])
    }

    fn update(&self, write: impl FnOnce(&mut Node)) {
        write(&mut self.page.doc.borrow_mut().nodes[self.index]);
    }

    /// Append a child element.
    #[must_use]
    pub fn child(&self, tag: &str) -> Self {
        self.page.insert(tag, Some(self.index))
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.update(|node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
        self
    }

    /// Set the bounding-box top relative to the viewport.
    #[must_use]
    pub fn top(self, top: f64) -> Self {
        self.move_to(top);
        self
    }

    /// Move the element, as if the page scrolled.
    pub fn move_to(&self, top: f64) {
        self.update(|node| node.top = top);
    }

    /// Set the inline `display` style.
    #[must_use]
    pub fn styled_display(self, value: &str) -> Self {
        self.update(|node| node.display = Some(value.to_string()));
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text_content(self, text: &str) -> Self {
        self.update(|node| node.text = Some(text.to_string()));
        self
    }

    /// Declare an `<input>` type and its default (markup) value; the current
    /// value starts at the default.
    #[must_use]
    pub fn input(self, input_type: &str, default_value: &str) -> Self {
        self.update(|node| {
            node.input_type = Some(input_type.to_ascii_lowercase());
            node.default_value = default_value.to_string();
            node.value = default_value.to_string();
        });
        self
    }

    /// Declare `<select>` options and the index marked `selected` in markup.
    #[must_use]
    pub fn options(self, count: usize, default_selected: usize) -> Self {
        self.update(|node| {
            node.options = count;
            let default = if count == 0 {
                -1
            } else {
                i32::try_from(default_selected.min(count - 1)).unwrap_or(-1)
            };
            node.default_selected_index = default;
            node.selected_index = default;
        });
        self
    }

    /// Simulate user input into a control.
    pub fn type_value(&self, value: &str) {
        self.update(|node| node.value = value.to_string());
    }

    /// Simulate a user choosing an option.
    pub fn choose(&self, index: i32) {
        self.set_selected_index(index);
    }

    /// Whether the class token is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.with(|node| node.classes.contains(class))
    }

    /// Current control value.
    #[must_use]
    pub fn value(&self) -> String {
        self.with(|node| node.value.clone())
    }

    /// Current selected option index, `-1` when none.
    #[must_use]
    pub fn selected_index(&self) -> i32 {
        self.with(|node| node.selected_index)
    }

    /// Every scroll-into-view request made on this element.
    #[must_use]
    pub fn scrolls(&self) -> Vec<ScrollMode> {
        self.with(|node| node.scrolls.clone())
    }

    /// Whether `self` sits inside `ancestor`.
    #[must_use]
    pub fn is_inside(&self, ancestor: &Self) -> bool {
        self.page.doc.borrow().is_descendant(self.index, ancestor.index)
    }
}

impl PageElement for FakeElement {
    fn top_offset(&self) -> f64 {
        self.with(|node| node.top)
    }

    fn set_class(&self, class: &str, present: bool) {
        self.update(|node| {
            if present {
                node.classes.insert(class.to_string());
            } else {
                node.classes.remove(class);
            }
        });
    }

    fn text(&self) -> Option<String> {
        self.with(|node| node.text.clone())
    }

    fn display(&self) -> Option<String> {
        self.with(|node| node.display.clone().filter(|value| !value.is_empty()))
    }

    fn set_display(&self, value: &str) {
        self.update(|node| node.display = Some(value.to_string()));
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let doc = self.page.doc.borrow();
        let mut current = Some(self.index);
        while let Some(index) = current {
            if doc.matches(index, selector) {
                return Some(Self {
                    page: self.page.clone(),
                    index,
                });
            }
            current = doc.nodes[index].parent;
        }
        None
    }

    fn contains(&self, other: &Self) -> bool {
        *self == *other
            || (Rc::ptr_eq(&self.page.doc, &other.page.doc)
                && self.page.doc.borrow().is_descendant(other.index, self.index))
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let doc = self.page.doc.borrow();
        (0..doc.nodes.len())
            .filter(|&index| doc.is_descendant(index, self.index) && doc.matches(index, selector))
            .map(|index| Self {
                page: self.page.clone(),
                index,
            })
            .collect()
    }

    fn reset_form(&self) -> bool {
        let mut doc = self.page.doc.borrow_mut();
        if doc.nodes[self.index].tag != "form" {
            return false;
        }
        for index in 0..doc.nodes.len() {
            if !doc.is_descendant(index, self.index) {
                continue;
            }
            let node = &mut doc.nodes[index];
            match node.tag.as_str() {
                "input" => node.value = node.default_value.clone(),
                "select" => node.selected_index = node.default_selected_index,
                _ => {}
            }
        }
        true
    }

    fn control_kind(&self) -> ControlKind {
        self.with(|node| match node.tag.as_str() {
            "select" => ControlKind::Select,
            "input" if node.input_type.as_deref() == Some("number") => ControlKind::NumberInput,
            "input" => ControlKind::Input,
            _ => ControlKind::Other,
        })
    }

    fn set_selected_index(&self, index: i32) {
        self.update(|node| {
            if node.tag != "select" {
                return;
            }
            let in_range = usize::try_from(index).is_ok_and(|index| index < node.options);
            node.selected_index = if in_range { index } else { -1 };
        });
    }

    fn set_value(&self, value: &str) {
        self.update(|node| {
            if node.tag == "input" {
                node.value = value.to_string();
            }
        });
    }

    fn scroll_into_view(&self, mode: ScrollMode) {
        self.update(|node| node.scrolls.push(mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn element_by_id_returns_same_identity() {
        let page = FakePage::new(800.0);
        let modal = page.create("div").id("predictionModal");
        let found = page.element_by_id("predictionModal").expect("modal present");
        assert_eq!(found, modal);
        assert!(page.element_by_id("missing").is_none());
    }

    #[test]
    fn selectors_cover_tag_id_class_and_attribute() {
        let page = FakePage::new(800.0);
        let section = page.create("section").attr("data-animate", "").id("hero");
        let form = page.create("form");
        let select = form.child("select");
        let input = form.child("input").input("number", "");
        section.set_class("card", true);

        assert_eq!(page.query_all("[data-animate]"), vec![section.clone()]);
        assert_eq!(page.query_all("#hero"), vec![section.clone()]);
        assert_eq!(page.query_all(".card"), vec![section]);
        assert_eq!(form.query_all("select, input"), vec![select, input]);
        assert!(page.query_all("div > span").is_empty());
    }

    #[test]
    fn descendant_queries_exclude_self_and_outsiders() {
        let page = FakePage::new(800.0);
        let modal = page.create("div");
        let content = modal.child("div");
        let button = content.child("button");
        let _outside = page.create("button");

        assert_eq!(modal.query_all("button"), vec![button.clone()]);
        assert!(button.is_inside(&modal));
        assert!(!modal.is_inside(&content));
    }

    #[test]
    fn closest_walks_inclusive_ancestors() {
        let page = FakePage::new(800.0);
        let modal = page.create("div").id("predictionModal");
        let button = modal.child("button").attr("data-modal-close", "");
        let icon = button.child("span");

        assert_eq!(icon.closest("[data-modal-close]"), Some(button.clone()));
        assert_eq!(button.closest("[data-modal-close]"), Some(button.clone()));
        assert_eq!(icon.closest("#predictionModal"), Some(modal.clone()));
        assert_eq!(modal.closest("[data-modal-close]"), None);
    }

    #[test]
    fn contains_is_inclusive_and_page_scoped() {
        let page = FakePage::new(800.0);
        let modal = page.create("div");
        let inner = modal.child("span");
        let other_page = FakePage::new(800.0);
        let foreign = other_page.create("div");

        assert!(modal.contains(&modal));
        assert!(modal.contains(&inner));
        assert!(!inner.contains(&modal));
        assert!(!modal.contains(&foreign));
    }

    #[test]
    fn timers_fire_in_deadline_order_when_clock_advances() {
        let page = FakePage::new(800.0);
        let order = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(300, "late"), (100, "early"), (100, "early-second")] {
            let order = Rc::clone(&order);
            page.set_timeout(delay, Box::new(move || order.borrow_mut().push(label)));
        }

        page.advance(99);
        assert!(order.borrow().is_empty());
        page.advance(1);
        assert_eq!(*order.borrow(), vec!["early", "early-second"]);
        page.advance(500);
        assert_eq!(*order.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(page.now_ms(), 600);
        assert_eq!(page.pending_timers(), 0);
    }

    #[test]
    fn timers_may_touch_the_page_and_schedule_more() {
        let page = FakePage::new(800.0);
        let modal = page.create("div").styled_display("block");
        let fired = Rc::new(Cell::new(0));
        {
            let (page_handle, modal, fired) = (page.clone(), modal.clone(), Rc::clone(&fired));
            page.set_timeout(
                10,
                Box::new(move || {
                    modal.set_display("none");
                    fired.set(fired.get() + 1);
                    let fired = Rc::clone(&fired);
                    page_handle.set_timeout(10, Box::new(move || fired.set(fired.get() + 1)));
                }),
            );
        }
        page.advance(20);
        assert_eq!(modal.display().as_deref(), Some("none"));
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn native_reset_restores_markup_defaults() {
        let page = FakePage::new(800.0);
        let form = page.create("form");
        let amount = form.child("input").input("number", "10");
        let channel = form.child("select").options(3, 2);
        amount.type_value("999");
        channel.choose(0);

        assert!(form.reset_form());
        assert_eq!(amount.value(), "10");
        assert_eq!(channel.selected_index(), 2);
        assert!(!amount.reset_form());
    }

    #[test]
    fn out_of_range_selection_clears_the_select() {
        let page = FakePage::new(800.0);
        let empty = page.create("select").options(0, 0);
        empty.set_selected_index(0);
        assert_eq!(empty.selected_index(), -1);
    }
}
