//! The seam between page behaviors and the document they run against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature talks to the page exclusively through [`Host`]. The browser
//! build implements it over `web_sys` (see `crate::web`); native tests
//! implement it over an in-memory arena document. Handlers registered through
//! the host run one at a time on a single thread, so implementations may use
//! interior mutability freely.

use std::time::Duration;

/// What a click handler wants done with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    /// Let the browser follow the link / submit the form as usual.
    Allow,
    /// Call `preventDefault()` on the event.
    Prevent,
}

/// Handler invoked on every window scroll event.
pub type ScrollHandler = Box<dyn FnMut()>;

/// Handler invoked on every click of the element it was bound to.
pub type ClickHandler = Box<dyn FnMut() -> DefaultAction>;

/// One-shot timer callback.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Document, viewport, event and timer access for the page controller.
///
/// Lookups return `None` rather than an error: a selector that is invalid
/// or matches nothing is simply an absent element.
pub trait Host: 'static {
    /// Handle to a single element. Cheap to clone; equality is identity.
    type Node: Clone + PartialEq + 'static;

    // --- Lookup ---

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn query_selector(&self, selector: &str) -> Option<Self::Node>;
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First descendant of `node` matching `selector`.
    fn query_within(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;
    /// All descendants of `node` matching `selector`, in document order.
    fn query_all_within(&self, node: &Self::Node, selector: &str) -> Vec<Self::Node>;
    /// Nearest inclusive ancestor of `node` matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    // --- Reading ---

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn child_element_count(&self, node: &Self::Node) -> usize;

    // --- Mutation ---

    fn set_text(&self, node: &Self::Node, text: &str);
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn toggle_class(&self, node: &Self::Node, class: &str);
    /// Set an inline style property. `property` is the kebab-case CSS name.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    /// Detach `node` from the document. No-op if already detached.
    fn remove(&self, node: &Self::Node);

    // --- Viewport ---

    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;
    /// Smoothly scroll so the top of `node` aligns with the viewport top.
    fn scroll_into_view(&self, node: &Self::Node);

    // --- Events, timers, clock ---

    fn on_scroll(&self, handler: ScrollHandler);
    fn on_click(&self, node: &Self::Node, handler: ClickHandler);
    /// Run `callback` once after `delay`. Cannot be cancelled.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback);
    /// Current calendar year from the local clock.
    fn current_year(&self) -> i32;
}
