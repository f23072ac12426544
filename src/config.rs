//! Page configuration: which elements and class names the behaviors bind to.
//!
//! DESIGN
//! ======
//! The host page's markup is addressed through a declarative mapping from
//! logical roles to element ids and marker classes. Every field has a default
//! matching the site's templates, and deserialization is `#[serde(default)]`
//! throughout, so a page only needs to spell out what it changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::roles::ElementRole;

/// Error returned by [`PageConfig::from_json`] and [`PageConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config document is not valid JSON for [`PageConfig`].
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A selector, id or class name is empty.
    #[error("page config field `{field}` must not be empty")]
    EmptyValue { field: &'static str },
}

/// Visual styling applied to the navbar once the page is scrolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarVariant {
    /// Solid dark background and tinted border.
    Solid,
    /// Translucent dark background with backdrop blur and drop shadow.
    #[default]
    Frosted,
}

/// Element ids for each [`ElementRole`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub year: String,
    pub navbar: String,
    pub navbar_background: String,
    pub nav_toggle: String,
    pub mobile_nav: String,
    pub nav_icon_open: String,
    pub nav_icon_close: String,
    pub back_to_top: String,
    pub toast_container: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            year: "year".into(),
            navbar: "navbar".into(),
            navbar_background: "navbar-bg".into(),
            nav_toggle: "navBtn".into(),
            mobile_nav: "mobileNav".into(),
            nav_icon_open: "navIconOpen".into(),
            nav_icon_close: "navIconClose".into(),
            back_to_top: "back-to-top".into(),
            toast_container: "toast-container".into(),
        }
    }
}

impl ElementIds {
    /// The configured id for `role`.
    pub fn id_for(&self, role: ElementRole) -> &str {
        match role {
            ElementRole::YearDisplay => &self.year,
            ElementRole::Navbar => &self.navbar,
            ElementRole::NavbarBackground => &self.navbar_background,
            ElementRole::NavToggle => &self.nav_toggle,
            ElementRole::MobileNav => &self.mobile_nav,
            ElementRole::NavIconOpen => &self.nav_icon_open,
            ElementRole::NavIconClose => &self.nav_icon_close,
            ElementRole::BackToTop => &self.back_to_top,
            ElementRole::ToastContainer => &self.toast_container,
        }
    }
}

/// Marker and state classes the behaviors read and write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub toast_item: String,
    pub toast_close: String,
    pub toast_enter: String,
    pub toast_exit: String,
    pub transparent_border: String,
    /// Toggled on the mobile nav panel and both nav icons.
    pub hidden: String,
    /// Applied to the back-to-top button while hidden; removes it from interaction.
    pub back_to_top_hidden: Vec<String>,
    pub back_to_top_visible: Vec<String>,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            toast_item: "toast-item".into(),
            toast_close: "toast-close".into(),
            toast_enter: "toast-enter".into(),
            toast_exit: "toast-exit".into(),
            transparent_border: "border-transparent".into(),
            hidden: "hidden".into(),
            back_to_top_hidden: vec!["opacity-0".into(), "pointer-events-none".into()],
            back_to_top_visible: vec!["opacity-100".into()],
        }
    }
}

/// Complete configuration for [`crate::controller::PageController`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub ids: ElementIds,
    pub classes: ClassNames,
    /// Selector for in-page anchor links that get smooth scrolling.
    pub anchor_selector: String,
    pub navbar_variant: NavbarVariant,
    /// Log every navbar / back-to-top state application at `debug`.
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            navbar_variant: NavbarVariant::default(),
            debug: false,
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config document.
    ///
    /// Fields absent from the document keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty ids, class names and selectors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = &self.ids;
        let classes = &self.classes;
        let required: [(&'static str, &str); 16] = [
            ("ids.year", &ids.year),
            ("ids.navbar", &ids.navbar),
            ("ids.navbar_background", &ids.navbar_background),
            ("ids.nav_toggle", &ids.nav_toggle),
            ("ids.mobile_nav", &ids.mobile_nav),
            ("ids.nav_icon_open", &ids.nav_icon_open),
            ("ids.nav_icon_close", &ids.nav_icon_close),
            ("ids.back_to_top", &ids.back_to_top),
            ("ids.toast_container", &ids.toast_container),
            ("classes.toast_item", &classes.toast_item),
            ("classes.toast_close", &classes.toast_close),
            ("classes.toast_enter", &classes.toast_enter),
            ("classes.toast_exit", &classes.toast_exit),
            ("classes.transparent_border", &classes.transparent_border),
            ("classes.hidden", &classes.hidden),
            ("anchor_selector", &self.anchor_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue { field });
            }
        }

        let lists: [(&'static str, &[String]); 2] = [
            ("classes.back_to_top_hidden", &classes.back_to_top_hidden),
            ("classes.back_to_top_visible", &classes.back_to_top_visible),
        ];
        for (field, values) in lists {
            if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
                return Err(ConfigError::EmptyValue { field });
            }
        }
        Ok(())
    }

    /// Selector matching toast items, e.g. `.toast-item`.
    pub fn toast_item_selector(&self) -> String {
        format!(".{}", self.classes.toast_item)
    }

    /// Selector matching toast close triggers, e.g. `.toast-close`.
    pub fn toast_close_selector(&self) -> String {
        format!(".{}", self.classes.toast_close)
    }
}

/// Resolve the page config from the optional inline config text.
///
/// Absent text yields defaults. Malformed or invalid text also yields
/// defaults, together with the error message for the caller to report.
pub fn config_from_text(raw: Option<&str>) -> (PageConfig, Option<String>) {
    let Some(raw) = raw else {
        return (PageConfig::default(), None);
    };
    match PageConfig::from_json(raw) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e.to_string())),
    }
}
