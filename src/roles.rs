//! Logical element roles, the features that depend on them, and one-shot
//! resolution of roles to live elements with collected diagnostics.
//!
//! Resolution runs once at startup. A feature whose roles are not all present
//! stays inert for the lifetime of the page; the rest are unaffected.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use std::collections::HashMap;
use std::fmt;

use crate::config::ElementIds;
use crate::host::Host;

/// An element the page behaviors locate by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    YearDisplay,
    Navbar,
    NavbarBackground,
    NavToggle,
    MobileNav,
    NavIconOpen,
    NavIconClose,
    BackToTop,
    ToastContainer,
}

impl ElementRole {
    pub const ALL: [Self; 9] = [
        Self::YearDisplay,
        Self::Navbar,
        Self::NavbarBackground,
        Self::NavToggle,
        Self::MobileNav,
        Self::NavIconOpen,
        Self::NavIconClose,
        Self::BackToTop,
        Self::ToastContainer,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::YearDisplay => "year display",
            Self::Navbar => "navbar",
            Self::NavbarBackground => "navbar background",
            Self::NavToggle => "nav toggle button",
            Self::MobileNav => "mobile nav panel",
            Self::NavIconOpen => "nav open icon",
            Self::NavIconClose => "nav close icon",
            Self::BackToTop => "back-to-top button",
            Self::ToastContainer => "toast container",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An independent page behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    YearStamp,
    NavbarScroll,
    MobileNav,
    Toasts,
    BackToTop,
    SmoothScroll,
}

impl Feature {
    pub const ALL: [Self; 6] =
        [Self::YearStamp, Self::NavbarScroll, Self::MobileNav, Self::Toasts, Self::BackToTop, Self::SmoothScroll];

    /// Roles that must all be present for the feature to bind.
    pub fn required_roles(self) -> &'static [ElementRole] {
        match self {
            Self::YearStamp => &[ElementRole::YearDisplay],
            Self::NavbarScroll => &[ElementRole::Navbar, ElementRole::NavbarBackground],
            Self::MobileNav => &[
                ElementRole::NavToggle,
                ElementRole::MobileNav,
                ElementRole::NavIconOpen,
                ElementRole::NavIconClose,
            ],
            Self::Toasts => &[ElementRole::ToastContainer],
            Self::BackToTop => &[ElementRole::BackToTop],
            // Anchors are discovered by selector, not by role.
            Self::SmoothScroll => &[],
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::YearStamp => "year stamp",
            Self::NavbarScroll => "navbar scroll",
            Self::MobileNav => "mobile nav",
            Self::Toasts => "toasts",
            Self::BackToTop => "back to top",
            Self::SmoothScroll => "smooth scroll",
        };
        f.write_str(name)
    }
}

/// A feature left inert because some of its elements were not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFeature {
    pub feature: Feature,
    pub missing: Vec<ElementRole>,
}

/// Every missing-element finding from startup resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub missing: Vec<MissingFeature>,
}

impl Diagnostics {
    /// True when every role-bound feature found all of its elements.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    /// Whether `feature` was left unbound.
    pub fn is_inert(&self, feature: Feature) -> bool {
        self.missing.iter().any(|m| m.feature == feature)
    }

    /// Roles `feature` could not find, empty if it bound.
    pub fn missing_roles(&self, feature: Feature) -> &[ElementRole] {
        self.missing
            .iter()
            .find(|m| m.feature == feature)
            .map_or(&[], |m| m.missing.as_slice())
    }
}

/// Elements found for each role at startup.
pub struct ResolvedElements<N> {
    nodes: HashMap<ElementRole, N>,
}

impl<N> ResolvedElements<N> {
    pub fn get(&self, role: ElementRole) -> Option<&N> {
        self.nodes.get(&role)
    }
}

/// Look up every role once and collect the features left without elements.
pub fn resolve<H: Host>(host: &H, ids: &ElementIds) -> (ResolvedElements<H::Node>, Diagnostics) {
    let nodes: HashMap<ElementRole, H::Node> = ElementRole::ALL
        .iter()
        .filter_map(|&role| host.element_by_id(ids.id_for(role)).map(|node| (role, node)))
        .collect();

    let mut diagnostics = Diagnostics::default();
    for feature in Feature::ALL {
        let missing: Vec<ElementRole> =
            feature.required_roles().iter().copied().filter(|role| !nodes.contains_key(role)).collect();
        if missing.is_empty() {
            continue;
        }

        let ids_missing: Vec<&str> = missing.iter().map(|&role| ids.id_for(role)).collect();
        if feature == Feature::NavbarScroll {
            log::warn!("navbar elements not found, scroll styling disabled: {ids_missing:?}");
        } else {
            log::debug!("{feature} disabled, missing elements: {ids_missing:?}");
        }
        diagnostics.missing.push(MissingFeature { feature, missing });
    }

    (ResolvedElements { nodes }, diagnostics)
}
