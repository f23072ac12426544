//! Navbar background transition on scroll.
//!
//! The navbar background layer is restyled from the scroll offset alone on
//! every call, so repeated application with the same offset is a no-op in
//! effect. There is no hysteresis around the threshold.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use std::rc::Rc;

use crate::config::NavbarVariant;
use crate::consts::NAVBAR_SCROLL_THRESHOLD_PX;
use crate::host::Host;

/// Presentation state of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVisualState {
    /// At (or near) the top of the page: transparent.
    Top,
    /// Scrolled past the threshold: dark background.
    Scrolled,
}

impl NavbarVisualState {
    #[must_use]
    pub fn from_offset(offset: f64) -> Self {
        if offset > NAVBAR_SCROLL_THRESHOLD_PX { Self::Scrolled } else { Self::Top }
    }
}

const SOLID_SCROLLED: &[(&str, &str)] =
    &[("background-color", "#1F2937"), ("border-bottom-color", "rgba(59, 130, 246, 0.2)")];

const SOLID_TOP: &[(&str, &str)] = &[("background-color", "transparent"), ("border-bottom-color", "transparent")];

const FROSTED_SCROLLED: &[(&str, &str)] = &[
    ("background-color", "rgba(17, 24, 39, 0.95)"),
    ("backdrop-filter", "blur(12px)"),
    ("-webkit-backdrop-filter", "blur(12px)"),
    ("border-bottom-color", "rgba(59, 130, 246, 0.3)"),
    ("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"),
];

const FROSTED_TOP: &[(&str, &str)] = &[
    ("background-color", "transparent"),
    ("backdrop-filter", "none"),
    ("-webkit-backdrop-filter", "none"),
    ("border-bottom-color", "transparent"),
    ("box-shadow", "none"),
];

/// Inline style declarations for `state` under `variant`.
#[must_use]
pub fn styles(variant: NavbarVariant, state: NavbarVisualState) -> &'static [(&'static str, &'static str)] {
    match (variant, state) {
        (NavbarVariant::Solid, NavbarVisualState::Scrolled) => SOLID_SCROLLED,
        (NavbarVariant::Solid, NavbarVisualState::Top) => SOLID_TOP,
        (NavbarVariant::Frosted, NavbarVisualState::Scrolled) => FROSTED_SCROLLED,
        (NavbarVariant::Frosted, NavbarVisualState::Top) => FROSTED_TOP,
    }
}

/// Restyle the navbar background for `state`.
pub fn apply<H: Host>(
    host: &H,
    background: &H::Node,
    variant: NavbarVariant,
    transparent_border_class: &str,
    state: NavbarVisualState,
) {
    for (property, value) in styles(variant, state) {
        host.set_style(background, property, value);
    }
    match state {
        NavbarVisualState::Scrolled => host.remove_class(background, transparent_border_class),
        NavbarVisualState::Top => host.add_class(background, transparent_border_class),
    }
}

/// The state last applied to `background`, read back from its border class.
pub fn state<H: Host>(host: &H, background: &H::Node, transparent_border_class: &str) -> NavbarVisualState {
    if host.has_class(background, transparent_border_class) {
        NavbarVisualState::Top
    } else {
        NavbarVisualState::Scrolled
    }
}

/// Apply the current state now and again on every scroll event.
pub fn bind<H: Host>(
    host: &Rc<H>,
    background: H::Node,
    variant: NavbarVariant,
    transparent_border_class: String,
    debug: bool,
) {
    let target = Rc::clone(host);
    let update = move || {
        let state = NavbarVisualState::from_offset(target.scroll_offset());
        if debug {
            log::debug!("navbar -> {state:?}");
        }
        apply(&*target, &background, variant, &transparent_border_class, state);
    };

    update();
    host.on_scroll(Box::new(update));
}
