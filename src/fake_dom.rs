//! In-memory [`Host`] for native tests.
//!
//! Arena document indexed by [`NodeId`], a compound-selector matcher covering
//! what the page behaviors query (`tag`, `#id`, `.class`, `[attr]`,
//! `[attr="v"]`, `[attr^="v"]`), a virtual millisecond clock with an ordered
//! timer queue, and synchronous scroll/click dispatch.

#[cfg(test)]
#[path = "fake_dom_test.rs"]
mod fake_dom_test;

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::host::{ClickHandler, DefaultAction, Host, ScrollHandler, TimerCallback};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const DOCUMENT: NodeId = NodeId(0);

#[derive(Debug, Default)]
struct FakeNode {
    tag: String,
    attrs: HashMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Timer {
    due_at: u64,
    order: u64,
    callback: TimerCallback,
}

pub struct FakeHost {
    nodes: RefCell<Vec<FakeNode>>,
    scroll_offset: Cell<f64>,
    scroll_listeners: RefCell<Vec<ScrollHandler>>,
    click_listeners: RefCell<Vec<(NodeId, ClickHandler)>>,
    timers: RefCell<Vec<Timer>>,
    now_ms: Cell<u64>,
    next_order: Cell<u64>,
    year: Cell<i32>,
    scrolled_into_view: RefCell<Vec<NodeId>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    pub fn new() -> Self {
        let document = FakeNode { tag: "#document".into(), ..FakeNode::default() };
        Self {
            nodes: RefCell::new(vec![document]),
            scroll_offset: Cell::new(0.0),
            scroll_listeners: RefCell::new(Vec::new()),
            click_listeners: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            now_ms: Cell::new(0),
            next_order: Cell::new(0),
            year: Cell::new(2024),
            scrolled_into_view: RefCell::new(Vec::new()),
        }
    }

    // --- Building ---

    pub fn root(&self) -> NodeId {
        DOCUMENT
    }

    /// Append a `<tag>` under `parent`. `id` and `class` attributes populate
    /// the id and class list; everything else is stored verbatim.
    pub fn append(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut node = FakeNode { tag: tag.to_ascii_lowercase(), parent: Some(parent), ..FakeNode::default() };
        for &(name, value) in attrs {
            if name == "class" {
                node.classes = value.split_whitespace().map(str::to_string).collect();
            } else {
                node.attrs.insert(name.to_string(), value.to_string());
            }
        }
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(node);
        nodes[parent.0].children.push(id);
        id
    }

    pub fn set_year(&self, year: i32) {
        self.year.set(year);
    }

    /// Set the scroll offset without dispatching a scroll event.
    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll_offset.set(offset);
    }

    // --- Inspecting ---

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].style.get(property).cloned()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.scrolled_into_view.borrow().clone()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_listeners.borrow().len()
    }

    pub fn click_listener_count(&self, node: NodeId) -> usize {
        self.click_listeners.borrow().iter().filter(|(target, _)| *target == node).count()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    // --- Dispatching ---

    /// Set the scroll offset and run every scroll listener.
    pub fn scroll_to(&self, offset: f64) {
        self.scroll_offset.set(offset);
        let mut listeners = std::mem::take(&mut *self.scroll_listeners.borrow_mut());
        for listener in &mut listeners {
            listener();
        }
        let added = std::mem::take(&mut *self.scroll_listeners.borrow_mut());
        listeners.extend(added);
        *self.scroll_listeners.borrow_mut() = listeners;
    }

    /// Run every click listener bound to `node`. Returns `Prevent` if any
    /// listener asked for the default action to be suppressed.
    pub fn click(&self, node: NodeId) -> DefaultAction {
        let mut listeners = std::mem::take(&mut *self.click_listeners.borrow_mut());
        let mut outcome = DefaultAction::Allow;
        for (target, listener) in &mut listeners {
            if *target == node && listener() == DefaultAction::Prevent {
                outcome = DefaultAction::Prevent;
            }
        }
        let added = std::mem::take(&mut *self.click_listeners.borrow_mut());
        listeners.extend(added);
        *self.click_listeners.borrow_mut() = listeners;
        outcome
    }

    /// Move the clock forward by `ms`, running every timer that falls due,
    /// including timers scheduled by callbacks run along the way.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get().saturating_add(ms);
        while let Some(timer) = self.take_next_due(target) {
            self.now_ms.set(timer.due_at);
            (timer.callback)();
        }
        self.now_ms.set(target);
    }

    fn take_next_due(&self, limit: u64) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let idx = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= limit)
            .min_by_key(|(_, t)| (t.due_at, t.order))
            .map(|(idx, _)| idx)?;
        Some(timers.remove(idx))
    }

    // --- Tree helpers ---

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[node.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &SelectorStep) -> bool {
        if node == DOCUMENT {
            return false;
        }
        let nodes = self.nodes.borrow();
        let n = &nodes[node.0];
        if selector.tag.as_ref().is_some_and(|tag| *tag != n.tag) {
            return false;
        }
        if selector.id.as_ref().is_some_and(|id| n.attrs.get("id") != Some(id)) {
            return false;
        }
        if !selector.classes.iter().all(|c| n.classes.contains(c)) {
            return false;
        }
        selector.attrs.iter().all(|cond| {
            let value = if cond.name == "class" { Some(n.classes.join(" ")) } else { n.attrs.get(&cond.name).cloned() };
            match (&cond.op, value) {
                (_, None) => false,
                (AttrOp::Exists, Some(_)) => true,
                (AttrOp::Equals(expected), Some(v)) => v == *expected,
                (AttrOp::Prefix(prefix), Some(v)) => v.starts_with(prefix.as_str()),
            }
        })
    }

    fn select_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(step) = parse_selector(selector) else {
            return Vec::new();
        };
        self.descendants(scope).into_iter().filter(|&n| self.matches(n, &step)).collect()
    }
}

impl Host for FakeHost {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(DOCUMENT)
            .into_iter()
            .find(|n| self.nodes.borrow()[n.0].attrs.get("id").map(String::as_str) == Some(id))
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.select_all(DOCUMENT, selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.select_all(DOCUMENT, selector)
    }

    fn query_within(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        self.select_all(*node, selector).into_iter().next()
    }

    fn query_all_within(&self, node: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select_all(*node, selector)
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let step = parse_selector(selector)?;
        let mut current = Some(*node);
        while let Some(n) = current {
            if self.matches(n, &step) {
                return Some(n);
            }
            current = self.nodes.borrow()[n.0].parent;
        }
        None
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = *node;
        loop {
            if current == DOCUMENT {
                return true;
            }
            match nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(name).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn child_element_count(&self, node: &NodeId) -> usize {
        self.nodes.borrow()[node.0].children.len()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) {
        if self.has_class(node, class) {
            self.remove_class(node, class);
        } else {
            self.add_class(node, class);
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].style.insert(property.to_string(), value.to_string());
    }

    fn remove(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes[node.0].parent.take() else {
            return;
        };
        nodes[parent.0].children.retain(|c| c != node);
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.scrolled_into_view.borrow_mut().push(*node);
    }

    fn on_scroll(&self, handler: ScrollHandler) {
        self.scroll_listeners.borrow_mut().push(handler);
    }

    fn on_click(&self, node: &NodeId, handler: ClickHandler) {
        self.click_listeners.borrow_mut().push((*node, handler));
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let order = self.next_order.get();
        self.next_order.set(order + 1);
        self.timers.borrow_mut().push(Timer { due_at: self.now_ms.get().saturating_add(delay_ms), order, callback });
    }

    fn current_year(&self) -> i32 {
        self.year.get()
    }
}

// =============================================================
// Selectors
// =============================================================

#[derive(Debug)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug)]
struct AttrCondition {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Default)]
struct SelectorStep {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

/// Parse a single compound selector. Combinators and pseudo-classes are not
/// supported and, like any malformed selector, yield `None`.
fn parse_selector(selector: &str) -> Option<SelectorStep> {
    let src = selector.trim();
    let bytes = src.as_bytes();
    let mut step = SelectorStep::default();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'#' => {
                let (id, next) = parse_ident(src, i + 1)?;
                if step.id.replace(id).is_some() {
                    return None;
                }
                i = next;
            }
            b'.' => {
                let (class, next) = parse_ident(src, i + 1)?;
                step.classes.push(class);
                i = next;
            }
            b'[' => {
                let (cond, next) = parse_attr_condition(src, i + 1)?;
                step.attrs.push(cond);
                i = next;
            }
            _ => {
                if i != 0 {
                    return None;
                }
                let (tag, next) = parse_ident(src, i)?;
                step.tag = Some(tag.to_ascii_lowercase());
                i = next;
            }
        }
    }

    if step.tag.is_none() && step.id.is_none() && step.classes.is_empty() && step.attrs.is_empty() {
        return None;
    }
    Some(step)
}

fn parse_ident(src: &str, start: usize) -> Option<(String, usize)> {
    let bytes = src.as_bytes();
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'-' || bytes[end] == b'_') {
        end += 1;
    }
    if end == start {
        return None;
    }
    Some((src[start..end].to_string(), end))
}

/// Parse `name]`, `name="v"]` or `name^="v"]` starting just after `[`.
fn parse_attr_condition(src: &str, start: usize) -> Option<(AttrCondition, usize)> {
    let bytes = src.as_bytes();
    let (name, i) = parse_ident(src, start)?;
    match bytes.get(i)? {
        b']' => Some((AttrCondition { name, op: AttrOp::Exists }, i + 1)),
        b'=' => {
            let (value, next) = parse_attr_value(src, i + 1)?;
            Some((AttrCondition { name, op: AttrOp::Equals(value) }, next))
        }
        b'^' if bytes.get(i + 1) == Some(&b'=') => {
            let (value, next) = parse_attr_value(src, i + 2)?;
            Some((AttrCondition { name, op: AttrOp::Prefix(value) }, next))
        }
        _ => None,
    }
}

/// Parse a quoted or bare value followed by `]`.
fn parse_attr_value(src: &str, start: usize) -> Option<(String, usize)> {
    let bytes = src.as_bytes();
    let (value, end) = match *bytes.get(start)? {
        quote @ (b'"' | b'\'') => {
            let len = src[start + 1..].find(char::from(quote))?;
            (src[start + 1..start + 1 + len].to_string(), start + 1 + len + 1)
        }
        _ => parse_ident(src, start)?,
    };
    if bytes.get(end) != Some(&b']') {
        return None;
    }
    Some((value, end + 1))
}
