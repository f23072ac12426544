//! Footer copyright year.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use crate::host::Host;

/// Write the current four-digit year into `node`. Returns the year written.
pub fn stamp<H: Host>(host: &H, node: &H::Node) -> i32 {
    let year = host.current_year();
    host.set_text(node, &format!("{year:04}"));
    year
}
