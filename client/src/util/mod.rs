//! Small shared helpers: fragment mirroring, pointer normalization, the
//! upload pipeline, and clock access.

pub mod fragment;
pub mod pointer;
pub mod uploads;

/// Current wall clock in milliseconds since the Unix epoch.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now_ms() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        js_sys::Date::now() as i64
    }
}
