//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use std::rc::Rc;

use crate::host::{DefaultAction, Host};

/// Scroll to the element named by `anchor`'s `href` fragment.
///
/// Returns whether a target was found. A missing or unparseable target is a
/// silent no-op.
pub fn navigate<H: Host>(host: &H, anchor: &H::Node) -> bool {
    let Some(href) = host.attribute(anchor, "href") else {
        return false;
    };
    let Some(target) = host.query_selector(&href) else {
        return false;
    };
    host.scroll_into_view(&target);
    true
}

/// Intercept clicks on every anchor matching `selector` present now.
/// Returns the number of anchors bound.
pub fn bind<H: Host>(host: &Rc<H>, selector: &str) -> usize {
    let anchors = host.query_selector_all(selector);
    for anchor in &anchors {
        let target = Rc::clone(host);
        let anchor_for_click = anchor.clone();
        host.on_click(
            anchor,
            Box::new(move || {
                navigate(&*target, &anchor_for_click);
                DefaultAction::Prevent
            }),
        );
    }
    anchors.len()
}
