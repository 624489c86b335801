use super::*;

#[test]
fn percent_rounds_fraction() {
    assert_eq!(percent(0.686), "69%");
    assert_eq!(percent(1.0), "100%");
}

#[test]
fn percent_of_non_finite_is_zero() {
    assert_eq!(percent(f64::NAN), "0%");
}

#[test]
fn risk_badge_text_appends_label() {
    assert_eq!(risk_badge_text(0.7), "70% Risk");
}

#[test]
fn bar_width_is_inline_style() {
    assert_eq!(bar_width(0.25), "width: 25%");
}

#[test]
fn flag_picks_branch() {
    assert_eq!(flag(true, "Matched", "Not Matched"), "Matched");
    assert_eq!(flag(false, "Matched", "Not Matched"), "Not Matched");
}

#[test]
fn count_rounds_and_guards() {
    assert_eq!(count(3.0), "3");
    assert_eq!(count(2.6), "3");
    assert_eq!(count(f64::INFINITY), "0");
}
