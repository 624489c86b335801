//! Display formatting for scores and flags.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use cases::risk::as_percent;

/// `0.68` -> `68%`.
#[must_use]
pub fn percent(score: f64) -> String {
    format!("{}%", as_percent(score))
}

/// Progress bar width for a 0-1 score, as an inline style.
#[must_use]
pub fn bar_width(score: f64) -> String {
    format!("width: {}%", as_percent(score))
}

/// `0.68` -> `68% Risk`.
#[must_use]
pub fn risk_badge_text(score: f64) -> String {
    format!("{}% Risk", as_percent(score))
}

/// `Verified` / `Not Verified` style pairs.
#[must_use]
pub fn flag(value: bool, yes: &'static str, no: &'static str) -> &'static str {
    if value { yes } else { no }
}

/// Whole-number display for counts the agent reports as JSON numbers.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn count(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.round() as i64)
    } else {
        "0".to_owned()
    }
}
