//! "Back to top" button visibility.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use std::rc::Rc;

use crate::consts::BACK_TO_TOP_THRESHOLD_PX;
use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackToTopVisibility {
    /// Transparent and excluded from pointer interaction.
    Hidden,
    Visible,
}

impl BackToTopVisibility {
    #[must_use]
    pub fn from_offset(offset: f64) -> Self {
        if offset > BACK_TO_TOP_THRESHOLD_PX { Self::Visible } else { Self::Hidden }
    }
}

/// Class sets swapped on the button. The button never leaves the document.
#[derive(Debug, Clone)]
pub struct BackToTopClasses {
    pub hidden: Vec<String>,
    pub visible: Vec<String>,
}

pub fn apply<H: Host>(host: &H, button: &H::Node, classes: &BackToTopClasses, state: BackToTopVisibility) {
    let (add, remove) = match state {
        BackToTopVisibility::Visible => (&classes.visible, &classes.hidden),
        BackToTopVisibility::Hidden => (&classes.hidden, &classes.visible),
    };
    for class in remove {
        host.remove_class(button, class);
    }
    for class in add {
        host.add_class(button, class);
    }
}

/// Read the button's current visibility back from its classes.
pub fn visibility<H: Host>(host: &H, button: &H::Node, classes: &BackToTopClasses) -> BackToTopVisibility {
    if classes.hidden.iter().all(|class| host.has_class(button, class)) {
        BackToTopVisibility::Hidden
    } else {
        BackToTopVisibility::Visible
    }
}

/// Apply the current state now and again on every scroll event.
pub fn bind<H: Host>(host: &Rc<H>, button: H::Node, classes: BackToTopClasses, debug: bool) {
    let target = Rc::clone(host);
    let update = move || {
        let state = BackToTopVisibility::from_offset(target.scroll_offset());
        if debug {
            log::debug!("back-to-top -> {state:?}");
        }
        apply(&*target, &button, &classes, state);
    };

    update();
    host.on_scroll(Box::new(update));
}
