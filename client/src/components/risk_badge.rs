//! Colored risk badge.

use cases::RiskLevel;
use leptos::prelude::*;

/// Badge colored by risk band: `risk-badge--red|amber|green`.
#[component]
pub fn RiskBadge(level: RiskLevel, #[prop(into)] text: String) -> impl IntoView {
    let class = format!("risk-badge risk-badge--{}", level.color());
    view! {
        <span class=class title=level.label()>
            {text}
        </span>
    }
}
