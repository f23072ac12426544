//! Independent page behaviors.
//!
//! DESIGN
//! ======
//! Each module owns one behavior and exposes a pure state type, an `apply`
//! or action function that mutates the page through [`crate::host::Host`],
//! and a `bind` function that wires it to events. Behaviors never talk to
//! each other; the only shared state is the document itself.

pub mod back_to_top;
pub mod mobile_nav;
pub mod navbar;
pub mod smooth_scroll;
pub mod toast;
pub mod year;
