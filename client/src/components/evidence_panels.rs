//! Renderers for the on-demand evidence-correlator and risk-scoring results.

use cases::agent::{EvidenceCorrelatorResult, RiskScoringResult};
use cases::RiskLevel;
use leptos::prelude::*;

use crate::components::risk_badge::RiskBadge;
use crate::util::format::{bar_width, count, flag, percent};

#[component]
pub fn EvidenceCorrelatorView(result: EvidenceCorrelatorResult) -> impl IntoView {
    let location = result.location_match;
    let device = result.device_match;
    let family = result.family_usage_analysis;

    view! {
        <div class="card">
            <h3 class="card__title">"Evidence Correlation"</h3>
            <div class="kv">
                <span>"User Present:"</span>
                <span>{flag(location.user_was_present, "Yes", "No")}</span>
            </div>
            <div class="kv">
                <span>"Distance From Transaction:"</span>
                <span>{format!("{:.1} mi", location.distance_from_transaction)}</span>
            </div>
            <div class="kv">
                <span>"User Location:"</span>
                <span>{location.user_location_at_time}</span>
            </div>
            <div class="kv">
                <span>"Transaction Location:"</span>
                <span>{location.transaction_location}</span>
            </div>
            <div class="kv">
                <span>"Location Confidence:"</span>
                <span>{percent(location.confidence)}</span>
            </div>
            <hr/>
            <div class="kv">
                <span>"Registered Device:"</span>
                <span>{device.registered_device}</span>
            </div>
            <div class="kv">
                <span>"Transaction Device:"</span>
                <span>{device.transaction_device_id}</span>
            </div>
            <div class="kv">
                <span>"Device Match:"</span>
                <span>{flag(device.device_id_matches, "Matched", "Not Matched")}</span>
            </div>
            <div class="kv">
                <span>"Known Device:"</span>
                <span>{flag(device.is_known_device, "Yes", "No")}</span>
            </div>
            <hr/>
            <div class="kv">
                <span>"Possible Family Member:"</span>
                <span>{family.potential_family_member.unwrap_or_else(|| "None".to_owned())}</span>
            </div>
            <div class="kv">
                <span>"Family Usage Likelihood:"</span>
                <span>{percent(family.family_member_likelihood)}</span>
            </div>
            <BulletList title="Family Evidence" items=family.supporting_evidence/>
            <div class="progress-row">
                <span>"Overall Evidence Score"</span>
                <div class="progress">
                    <div class="progress__bar" style=bar_width(result.overall_evidence_score)></div>
                </div>
                <span>{percent(result.overall_evidence_score)}</span>
            </div>
            <BulletList title="Red Flags" items=result.red_flags/>
            <BulletList title="Supporting Factors" items=result.supporting_factors/>
        </div>
    }
}

#[component]
pub fn RiskScoringView(result: RiskScoringResult) -> impl IntoView {
    let level = RiskLevel::from_score(result.friendly_fraud_score);
    let account = result.account_analysis;
    let history = result.dispute_history;
    let indicators = result.fraud_indicators;
    let has_factors = !result.risk_factors.is_empty();

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Risk Scoring"</h3>
                <RiskBadge level text=percent(result.friendly_fraud_score)/>
            </div>
            <div class="progress">
                <div class="progress__bar" style=bar_width(result.friendly_fraud_score)></div>
            </div>
            <div class="kv">
                <span>"Account Age:"</span>
                <span>{format!("{} days", count(account.account_age_days))}</span>
            </div>
            <div class="kv">
                <span>"Account Standing:"</span>
                <span>{account.account_standing}</span>
            </div>
            <div class="kv">
                <span>"Avg Monthly Deposits:"</span>
                <span>{cases::record::format_usd(account.average_monthly_deposits)}</span>
            </div>
            <div class="kv">
                <span>"Deposit Consistency:"</span>
                <span>{account.deposit_consistency}</span>
            </div>
            <hr/>
            <div class="kv">
                <span>"Total Disputes:"</span>
                <span>{count(history.total_disputes)}</span>
            </div>
            <div class="kv">
                <span>"Last 12 Months:"</span>
                <span>{count(history.disputes_last_12_months)}</span>
            </div>
            <div class="kv">
                <span>"Win Rate:"</span>
                <span>{percent(history.win_rate)}</span>
            </div>
            <BulletList title="Dispute Patterns" items=history.patterns/>
            <div class="kv">
                <span>"In Fraud Database:"</span>
                <span>{flag(indicators.in_fraud_database, "Yes", "No")}</span>
            </div>
            <BulletList title="Fraud Alerts" items=indicators.fraud_alerts/>
            <BulletList title="Velocity Flags" items=indicators.velocity_flags/>
            <Show when=move || has_factors>
                <p class="card__subtitle">"Risk Factors"</p>
            </Show>
            <ul class="risk-factors">
                {result
                    .risk_factors
                    .into_iter()
                    .map(|factor| {
                        view! {
                            <li class="risk-factors__item">
                                <span class="risk-factors__name">{factor.factor}</span>
                                <span class="badge badge--outline">{factor.severity}</span>
                                <span class="risk-factors__impact">{format!("{:+.2}", factor.impact_on_score)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="recommendation">
                <p class="recommendation__label">"Recommendation"</p>
                <p>{result.recommendation}</p>
            </div>
            <p class="card__reasoning">{result.reasoning}</p>
        </div>
    }
}

/// Titled bullet list; renders nothing when `items` is empty.
#[component]
pub fn BulletList(#[prop(into)] title: String, items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }
    view! {
        <div class="bullet-list">
            <p class="bullet-list__title">{title}</p>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
