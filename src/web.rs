//! Browser backend and WASM entry point.
//!
//! ARCHITECTURE
//! ============
//! [`WebHost`] implements [`Host`] over `web_sys`. Event listener closures and
//! timers are leaked with `forget()`: they are bound once per page load and
//! live as long as the page. The controller is kept in a thread-local so that
//! templates calling `closeToast(this)` inline reach the same toast settings.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::LevelFilter;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::config::{PageConfig, config_from_text};
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::PageController;
use crate::host::{ClickHandler, DefaultAction, Host, ScrollHandler, TimerCallback};

thread_local! {
    static CONTROLLER: RefCell<Option<PageController<WebHost>>> = const { RefCell::new(None) };
}

/// [`Host`] backed by the live browser window and document.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// `None` outside a browser window context (e.g. in a worker).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Host for WebHost {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        self.document.query_selector_all(selector).map(collect_elements).unwrap_or_default()
    }

    fn query_within(&self, node: &Element, selector: &str) -> Option<Element> {
        node.query_selector(selector).ok().flatten()
    }

    fn query_all_within(&self, node: &Element, selector: &str) -> Vec<Element> {
        node.query_selector_all(selector).map(collect_elements).unwrap_or_default()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn child_element_count(&self, node: &Element) -> usize {
        node.child_element_count() as usize
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn toggle_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().toggle(class);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_else(|_| {
            self.document.document_element().map_or(0.0, |root| f64::from(root.scroll_top()))
        })
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn on_scroll(&self, handler: ScrollHandler) {
        let closure = Closure::wrap(handler);
        let _ = self.window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_click(&self, node: &Element, mut handler: ClickHandler) {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if handler() == DefaultAction::Prevent {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = node.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_timeout(&self, delay: Duration, callback: TimerCallback) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback).forget();
    }

    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
}

/// Read the optional inline JSON config. Must run after the document is parsed.
fn load_config(document: &Document) -> PageConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let (config, error) = config_from_text(raw.as_deref());
    if let Some(e) = error {
        log::error!("{e}; using default page config");
    }
    config
}

fn init(host: WebHost) {
    let config = load_config(&host.document);
    log::set_max_level(if config.debug { LevelFilter::Debug } else { LevelFilter::Info });
    let controller = PageController::init(Rc::new(host), config);
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}

/// WASM start hook: set up logging, then bind the page once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Narrowed to the configured level once the config element is readable.
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(host) = WebHost::new() else {
        return;
    };

    if host.document.ready_state() == "loading" {
        let document = host.document.clone();
        let on_ready = Closure::once_into_js(move || init(host));
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        init(host);
    }
}

/// Close the toast enclosing `trigger`. Exposed for inline `onclick` handlers.
#[wasm_bindgen(js_name = closeToast)]
pub fn close_toast(trigger: Element) {
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            controller.close_toast_from_trigger(&trigger);
        }
    });
}
