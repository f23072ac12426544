//! Page controller: resolves the page's elements once and binds every
//! behavior whose elements were found.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::features::back_to_top::{self, BackToTopClasses, BackToTopVisibility};
use crate::features::mobile_nav::{self, MobileNavElements, MobileNavVisibility};
use crate::features::navbar::{self, NavbarVisualState};
use crate::features::smooth_scroll;
use crate::features::toast::{self, ToastPhase, ToastSettings};
use crate::features::year;
use crate::host::Host;
use crate::roles::{self, Diagnostics, ElementRole, Feature, ResolvedElements};

/// Handle to the behaviors bound on one page.
pub struct PageController<H: Host> {
    host: Rc<H>,
    config: PageConfig,
    elements: ResolvedElements<H::Node>,
    diagnostics: Diagnostics,
    bound: Vec<Feature>,
    toast_settings: Rc<ToastSettings>,
}

impl<H: Host> PageController<H> {
    /// Resolve elements and bind every behavior that can run.
    ///
    /// Never fails: a behavior missing elements is skipped and reported in
    /// [`Self::diagnostics`].
    pub fn init(host: Rc<H>, config: PageConfig) -> Self {
        let (elements, diagnostics) = roles::resolve(&*host, &config.ids);
        let toast_settings = Rc::new(ToastSettings::from_config(&config));
        let mut bound = Vec::new();

        if let Some(node) = elements.get(ElementRole::YearDisplay) {
            year::stamp(&*host, node);
            bound.push(Feature::YearStamp);
        }

        if elements.get(ElementRole::Navbar).is_some() {
            if let Some(background) = elements.get(ElementRole::NavbarBackground) {
                navbar::bind(
                    &host,
                    background.clone(),
                    config.navbar_variant,
                    config.classes.transparent_border.clone(),
                    config.debug,
                );
                bound.push(Feature::NavbarScroll);
            }
        }

        if let Some(nav) = mobile_nav_elements(&elements) {
            mobile_nav::bind(&host, nav, config.classes.hidden.clone());
            bound.push(Feature::MobileNav);
        }

        if let Some(container) = elements.get(ElementRole::ToastContainer) {
            toast::bind(&host, container, Rc::clone(&toast_settings));
            bound.push(Feature::Toasts);
        }

        if let Some(button) = elements.get(ElementRole::BackToTop) {
            back_to_top::bind(&host, button.clone(), back_to_top_classes(&config), config.debug);
            bound.push(Feature::BackToTop);
        }

        let anchors = smooth_scroll::bind(&host, &config.anchor_selector);
        log::debug!("smooth scroll bound to {anchors} anchor(s)");
        bound.push(Feature::SmoothScroll);

        log::info!("page interactions initialized: {} of {} features bound", bound.len(), Feature::ALL.len());

        Self { host, config, elements, diagnostics, bound, toast_settings }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn bound_features(&self) -> &[Feature] {
        &self.bound
    }

    pub fn is_bound(&self, feature: Feature) -> bool {
        self.bound.contains(&feature)
    }

    // --- State probes ---

    /// Navbar state as last applied to the background, if the navbar is bound.
    pub fn navbar_state(&self) -> Option<NavbarVisualState> {
        if !self.is_bound(Feature::NavbarScroll) {
            return None;
        }
        let background = self.elements.get(ElementRole::NavbarBackground)?;
        Some(navbar::state(&*self.host, background, &self.config.classes.transparent_border))
    }

    pub fn mobile_nav_visibility(&self) -> Option<MobileNavVisibility> {
        if !self.is_bound(Feature::MobileNav) {
            return None;
        }
        let panel = self.elements.get(ElementRole::MobileNav)?;
        Some(mobile_nav::visibility(&*self.host, panel, &self.config.classes.hidden))
    }

    pub fn back_to_top_visibility(&self) -> Option<BackToTopVisibility> {
        if !self.is_bound(Feature::BackToTop) {
            return None;
        }
        let button = self.elements.get(ElementRole::BackToTop)?;
        Some(back_to_top::visibility(&*self.host, button, &back_to_top_classes(&self.config)))
    }

    pub fn toast_phase(&self, toast: &H::Node) -> ToastPhase {
        toast::phase(&*self.host, toast, &self.toast_settings)
    }

    // --- Actions ---

    /// Close `toast` as its close trigger would. Safe to call repeatedly.
    pub fn close_toast(&self, toast: &H::Node) -> bool {
        toast::close(&self.host, toast, &self.toast_settings)
    }

    /// Close the toast enclosing `trigger`, if any.
    pub fn close_toast_from_trigger(&self, trigger: &H::Node) -> bool {
        self.host
            .closest(trigger, &self.toast_settings.item_selector)
            .is_some_and(|toast| self.close_toast(&toast))
    }
}

fn mobile_nav_elements<N: Clone>(elements: &ResolvedElements<N>) -> Option<MobileNavElements<N>> {
    Some(MobileNavElements {
        toggle: elements.get(ElementRole::NavToggle)?.clone(),
        panel: elements.get(ElementRole::MobileNav)?.clone(),
        icon_open: elements.get(ElementRole::NavIconOpen)?.clone(),
        icon_close: elements.get(ElementRole::NavIconClose)?.clone(),
    })
}

fn back_to_top_classes(config: &PageConfig) -> BackToTopClasses {
    BackToTopClasses {
        hidden: config.classes.back_to_top_hidden.clone(),
        visible: config.classes.back_to_top_visible.clone(),
    }
}
