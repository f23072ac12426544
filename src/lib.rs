//! Client-side interactions for the marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! pages. It binds a fixed set of independent behaviors once per page load:
//! the footer year, the navbar background on scroll, the mobile nav toggle,
//! toast auto-dismissal, the back-to-top button and smooth anchor scrolling.
//! All page access goes through [`host::Host`], so every behavior runs
//! natively in tests against an in-memory document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Startup resolution and binding; state probes |
//! | [`features`] | One module per behavior |
//! | [`config`] | Role → id mapping, marker classes, navbar variant |
//! | [`roles`] | Element roles, features and missing-element diagnostics |
//! | [`host`] | Document / event / timer seam |
//! | [`consts`] | Thresholds and delays |
//! | `web` | `web_sys` host and WASM entry point (`hydrate` feature) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod features;
pub mod host;
pub mod roles;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod fake_dom;
