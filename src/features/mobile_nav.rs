//! Mobile navigation panel toggle.
//!
//! The panel and its open/close icon pair are flipped together in a single
//! handler invocation, so the icons always mirror the panel.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

use std::rc::Rc;

use crate::host::{DefaultAction, Host};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileNavVisibility {
    Open,
    Closed,
}

#[derive(Debug, Clone)]
pub struct MobileNavElements<N> {
    pub toggle: N,
    pub panel: N,
    pub icon_open: N,
    pub icon_close: N,
}

/// Flip the panel and both icons.
pub fn toggle<H: Host>(host: &H, elements: &MobileNavElements<H::Node>, hidden_class: &str) {
    host.toggle_class(&elements.panel, hidden_class);
    host.toggle_class(&elements.icon_open, hidden_class);
    host.toggle_class(&elements.icon_close, hidden_class);
}

/// Force the closed state: panel and close icon hidden, open icon shown.
pub fn close<H: Host>(host: &H, elements: &MobileNavElements<H::Node>, hidden_class: &str) {
    host.add_class(&elements.panel, hidden_class);
    host.remove_class(&elements.icon_open, hidden_class);
    host.add_class(&elements.icon_close, hidden_class);
}

pub fn visibility<H: Host>(host: &H, panel: &H::Node, hidden_class: &str) -> MobileNavVisibility {
    if host.has_class(panel, hidden_class) { MobileNavVisibility::Closed } else { MobileNavVisibility::Open }
}

/// Start closed and flip on every click of the toggle button.
pub fn bind<H: Host>(host: &Rc<H>, elements: MobileNavElements<H::Node>, hidden_class: String) {
    close(&**host, &elements, &hidden_class);

    let target = Rc::clone(host);
    let button = elements.toggle.clone();
    host.on_click(
        &button,
        Box::new(move || {
            toggle(&*target, &elements, &hidden_class);
            DefaultAction::Allow
        }),
    );
}
