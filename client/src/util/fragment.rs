//! Pan offset mirrored into the URL fragment (`#x=<int>&y=<int>`).
//!
//! The fragment makes a view position shareable: it is parsed once at
//! startup to seed the camera and rewritten whenever a pan settles.
//! Parsing and formatting are pure; only the `Location` access is gated.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Parse a fragment string into a pan offset. Accepts an optional leading
/// `#`; both keys must parse as numbers or the fragment is ignored.
#[must_use]
pub fn parse(fragment: &str) -> Option<(f64, f64)> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut x = None;
    let mut y = None;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=')?;
        match key {
            "x" => x = value.parse::<f64>().ok(),
            "y" => y = value.parse::<f64>().ok(),
            _ => {}
        }
    }
    Some((x?, y?))
}

/// Format a pan offset as a fragment value, rounded to whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format(x: f64, y: f64) -> String {
    format!("x={}&y={}", x.round() as i64, y.round() as i64)
}

/// Read the pan offset from the current page URL.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn read() -> Option<(f64, f64)> {
    let hash = web_sys::window()?.location().hash().ok()?;
    parse(&hash)
}

/// Write the pan offset into the current page URL.
#[cfg(feature = "hydrate")]
pub fn write(x: f64, y: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_hash(&format(x, y)).is_err() {
        log::warn!("could not update the URL fragment");
    }
}
