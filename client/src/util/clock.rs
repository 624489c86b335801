//! Wall-clock access for the browser.

/// Milliseconds since the Unix epoch. Returns 0 outside the browser.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
