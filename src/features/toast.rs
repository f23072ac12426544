//! Toast notification dismissal.
//!
//! LIFECYCLE
//! =========
//! Toasts are rendered server-side into the toast container. Each toast
//! present at startup is closed automatically after [`TOAST_AUTO_DISMISS`],
//! or earlier through its close trigger. Closing swaps the enter class for
//! the exit class, then removes the toast after [`TOAST_EXIT_DURATION`]; the
//! container goes with its last toast.
//!
//! Timers cannot be cancelled, so closing must tolerate a toast that is
//! already exiting or already gone.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::consts::{TOAST_AUTO_DISMISS, TOAST_EXIT_DURATION};
use crate::host::{DefaultAction, Host};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Exiting,
    Removed,
}

/// Ids, selectors and classes the toast behavior works with.
#[derive(Debug, Clone)]
pub struct ToastSettings {
    pub container_id: String,
    pub item_selector: String,
    pub close_selector: String,
    pub enter_class: String,
    pub exit_class: String,
}

impl ToastSettings {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            container_id: config.ids.toast_container.clone(),
            item_selector: config.toast_item_selector(),
            close_selector: config.toast_close_selector(),
            enter_class: config.classes.toast_enter.clone(),
            exit_class: config.classes.toast_exit.clone(),
        }
    }
}

pub fn phase<H: Host>(host: &H, toast: &H::Node, settings: &ToastSettings) -> ToastPhase {
    if !host.is_connected(toast) {
        ToastPhase::Removed
    } else if host.has_class(toast, &settings.exit_class) {
        ToastPhase::Exiting
    } else if host.has_class(toast, &settings.enter_class) {
        ToastPhase::Entering
    } else {
        ToastPhase::Visible
    }
}

/// Start the exit animation and schedule removal.
///
/// Returns `false` without touching the page if the toast is already gone
/// or already exiting.
pub fn close<H: Host>(host: &Rc<H>, toast: &H::Node, settings: &Rc<ToastSettings>) -> bool {
    match phase(&**host, toast, settings) {
        ToastPhase::Removed | ToastPhase::Exiting => return false,
        ToastPhase::Entering | ToastPhase::Visible => {}
    }

    host.remove_class(toast, &settings.enter_class);
    host.add_class(toast, &settings.exit_class);
    log::debug!("toast closing");

    let target = Rc::clone(host);
    let toast = toast.clone();
    let settings = Rc::clone(settings);
    host.set_timeout(
        TOAST_EXIT_DURATION,
        Box::new(move || {
            target.remove(&toast);
            let Some(container) = target.element_by_id(&settings.container_id) else {
                return;
            };
            if target.child_element_count(&container) == 0 {
                target.remove(&container);
                log::debug!("toast container emptied and removed");
            }
        }),
    );
    true
}

/// Wire close triggers and schedule auto-dismissal for every toast currently
/// in `container`. Returns the number of toasts scheduled.
///
/// Toasts inserted later are not picked up.
pub fn bind<H: Host>(host: &Rc<H>, container: &H::Node, settings: Rc<ToastSettings>) -> usize {
    let toasts = host.query_all_within(container, &settings.item_selector);

    for toast in &toasts {
        if let Some(trigger) = host.query_within(toast, &settings.close_selector) {
            let target = Rc::clone(host);
            let settings = Rc::clone(&settings);
            let clicked = trigger.clone();
            host.on_click(
                &trigger,
                Box::new(move || {
                    if let Some(toast) = target.closest(&clicked, &settings.item_selector) {
                        close(&target, &toast, &settings);
                    }
                    DefaultAction::Allow
                }),
            );
        }

        let target = Rc::clone(host);
        let settings = Rc::clone(&settings);
        let toast = toast.clone();
        host.set_timeout(
            TOAST_AUTO_DISMISS,
            Box::new(move || {
                close(&target, &toast, &settings);
            }),
        );
    }

    log::debug!("scheduled auto-dismiss for {} toast(s)", toasts.len());
    toasts.len()
}
