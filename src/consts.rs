//! Fixed thresholds and delays shared by the page behaviors.

use std::time::Duration;

// ── Scroll thresholds ───────────────────────────────────────────

/// Offset (px) past which the navbar switches to its scrolled styling.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Offset (px) past which the back-to-top button becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// ── Toast timing ────────────────────────────────────────────────

/// How long a toast present at load stays before it is closed automatically.
pub const TOAST_AUTO_DISMISS: Duration = Duration::from_millis(2000);

/// Exit animation grace period between marking a toast exiting and removing it.
pub const TOAST_EXIT_DURATION: Duration = Duration::from_millis(400);

// ── Browser wiring ──────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` element holding page config.
pub const CONFIG_ELEMENT_ID: &str = "site-interactions-config";
