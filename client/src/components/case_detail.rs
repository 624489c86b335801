//! Center dashboard column: the selected case's analysis.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting a queue row opens the case here. The analysis comes from the
//! case-manager agent, or from the intake conversation when the analyst
//! opens the transaction the customer just disputed. Evidence correlation
//! and risk scoring run only when the analyst asks for them.

use cases::agent::{CaseManagerResult, EvidenceSummary};
use cases::record::format_usd;
use cases::{AgentEnvelope, AgentKind, CaseRecord, RiskLevel};
use leptos::prelude::*;

use crate::components::evidence_panels::{BulletList, EvidenceCorrelatorView, RiskScoringView};
use crate::components::risk_badge::RiskBadge;
use crate::components::timeline_item::TimelineItem;
use crate::state::case_detail::{CaseDetailState, DetailTab, Fetch};
use crate::state::dashboard::DashboardState;
use crate::state::shell::ShellState;
use crate::util::format::{bar_width, flag, percent, risk_badge_text};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn CaseDetail() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    let shell = expect_context::<RwSignal<ShellState>>();

    let record = Memo::new(move |_| dashboard.with(DashboardState::selected_record));
    let analysis = Memo::new(move |_| detail.with(|d| d.analysis.clone()));

    // Open the case whenever the selection changes.
    Effect::new(move || {
        let Some(record) = record.get() else {
            return;
        };
        if detail.with_untracked(|d| d.is_current(&record.id)) {
            return;
        }
        let cached = shell.with_untracked(|s| s.cached_analysis(&record.id));
        let needs_call = cached.is_none();
        let Some(generation) = detail.try_update(|d| d.open(&record.id, cached)) else {
            return;
        };
        if needs_call {
            run_agent(
                detail,
                AgentKind::CaseManager,
                record.id.clone(),
                generation,
                record.analysis_prompt(),
                CaseDetailState::finish_analysis,
            );
        }
    });

    view! {
        <div class="case-detail">
            {move || {
                let Some(record) = record.get() else {
                    return ().into_any();
                };
                match analysis.get() {
                    Fetch::Idle | Fetch::Loading => {
                        view! {
                            <div class="case-detail__loading">
                                <span class="spinner" aria-label="Loading"></span>
                            </div>
                        }
                            .into_any()
                    }
                    Fetch::Failed => {
                        view! {
                            <div class="case-detail__empty">
                                <p>"Unable to load case data"</p>
                            </div>
                        }
                            .into_any()
                    }
                    Fetch::Ready(result) => view! { <CaseAnalysis record result/> }.into_any(),
                }
            }}
        </div>
    }
}

/// Invoke `agent` for `case_id` and settle the result with `apply` under the
/// pane generation the call started in.
pub(crate) fn run_agent(
    detail: RwSignal<CaseDetailState>,
    agent: AgentKind,
    case_id: String,
    generation: u64,
    message: String,
    apply: fn(&mut CaseDetailState, u64, Option<&AgentEnvelope>),
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let envelope = crate::net::api::call_agent(agent, &message).await;
            match &envelope {
                Ok(env) if !env.success => {
                    log::warn!("{agent} call for {case_id} failed: {}", env.error.clone().unwrap_or_default());
                }
                Err(e) => log::warn!("{agent} call for {case_id} failed: {e}"),
                Ok(_) => {}
            }
            // The pane may be gone by the time the agent answers.
            let _ = detail.try_update(|d| apply(d, generation, envelope.as_ref().ok()));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (agent, case_id, message);
        detail.update(|d| apply(d, generation, None));
    }
}

#[component]
fn CaseAnalysis(record: CaseRecord, result: CaseManagerResult) -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    let tab = Memo::new(move |_| detail.with(|d| d.tab));

    let score = result.risk_assessment.friendly_fraud_score;
    let title = format!("Case {}", result.case_id);
    let subtitle = format!("{} - {}", result.merchant_analysis.decoded_name, format_usd(record.amount));

    view! {
        <div class="case-analysis">
            <div class="card case-analysis__header">
                <div>
                    <h2 class="card__title">{title}</h2>
                    <p class="card__subtitle">{subtitle}</p>
                </div>
                <RiskBadge level=RiskLevel::from_score(score) text=risk_badge_text(score)/>
            </div>

            <div class="tabs">
                {DetailTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| detail.update(|d| d.tab = t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let record = record.clone();
                let result = result.clone();
                match tab.get() {
                    DetailTab::Summary => view! { <SummaryTab result/> }.into_any(),
                    DetailTab::Evidence => view! { <EvidenceTab record result/> }.into_any(),
                    DetailTab::Timeline => view! { <TimelineTab score/> }.into_any(),
                    DetailTab::Notes => view! { <NotesTab next_steps=result.next_steps/> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn SummaryTab(result: CaseManagerResult) -> impl IntoView {
    let score = result.risk_assessment.friendly_fraud_score;
    let evidence_score = result.evidence_summary.evidence_score;
    let summary_html = render_markdown_html(&result.case_summary);
    let recommended = result.recommended_action_display();

    view! {
        <div class="card">
            <h3 class="card__title">"AI Analysis"</h3>
            <p class="card__caption">"Case Summary"</p>
            <div class="markdown" inner_html=summary_html></div>
            <hr/>
            <div class="card__header">
                <p class="card__caption">"AI Recommendation"</p>
                <span class="badge badge--outline">
                    {format!("{} confidence", percent(result.merchant_analysis.confidence))}
                </span>
            </div>
            <div class="recommendation">
                <p>{recommended}</p>
            </div>
            <hr/>
            <BulletList title="Key Findings" items=result.key_findings/>
        </div>

        <EvidenceCards summary=result.evidence_summary/>

        <div class="card">
            <h3 class="card__title">"Risk Assessment"</h3>
            <div class="card__header">
                <p>"Friendly Fraud Probability"</p>
                <RiskBadge level=RiskLevel::from_score(score) text=percent(score)/>
            </div>
            <div class="progress">
                <div class="progress__bar" style=bar_width(score)></div>
            </div>
            <div class="progress-row">
                <span>"Evidence Score"</span>
                <div class="progress">
                    <div class="progress__bar" style=bar_width(evidence_score)></div>
                </div>
                <span>{percent(evidence_score)}</span>
            </div>
            <p class="card__reasoning">{result.risk_assessment.recommendation}</p>
        </div>
    }
}

#[component]
fn EvidenceCards(summary: EvidenceSummary) -> impl IntoView {
    view! {
        <div class="evidence-cards">
            <div class="evidence-card" class:evidence-card--ok=summary.location_verified>
                <p class="evidence-card__title">"Location"</p>
                <p>{flag(summary.location_verified, "Verified", "Not Verified")}</p>
            </div>
            <div class="evidence-card" class:evidence-card--ok=summary.device_verified>
                <p class="evidence-card__title">"Device"</p>
                <p>{flag(summary.device_verified, "Matched", "Not Matched")}</p>
            </div>
            <div class="evidence-card" class:evidence-card--warn=summary.family_usage_suspected>
                <p class="evidence-card__title">"Family Usage"</p>
                <p>{flag(summary.family_usage_suspected, "Suspected", "Not Detected")}</p>
            </div>
        </div>
    }
}

#[component]
fn EvidenceTab(record: CaseRecord, result: CaseManagerResult) -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();
    let evidence = Memo::new(move |_| detail.with(|d| d.evidence.clone()));
    let risk = Memo::new(move |_| detail.with(|d| d.risk.clone()));

    let evidence_record = record.clone();
    let on_run_evidence = move |_| {
        let generation = detail.with_untracked(|d| d.generation);
        detail.update(|d| d.evidence = Fetch::Loading);
        run_agent(
            detail,
            AgentKind::EvidenceCorrelator,
            evidence_record.id.clone(),
            generation,
            evidence_record.evidence_prompt(),
            CaseDetailState::finish_evidence,
        );
    };
    let risk_record = record;
    let on_run_risk = move |_| {
        let generation = detail.with_untracked(|d| d.generation);
        detail.update(|d| d.risk = Fetch::Loading);
        run_agent(
            detail,
            AgentKind::RiskScoring,
            risk_record.id.clone(),
            generation,
            risk_record.risk_prompt(),
            CaseDetailState::finish_risk,
        );
    };

    let summary = result.evidence_summary;
    let merchant = result.merchant_analysis;

    view! {
        <div class="card">
            <h3 class="card__title">"GPS Correlation"</h3>
            <div class="kv">
                <span>"User Location:"</span>
                <span>{flag(summary.location_verified, "Nearby", "Distant")}</span>
            </div>
        </div>
        <div class="card">
            <h3 class="card__title">"Device Fingerprint"</h3>
            <div class="kv">
                <span>"Transaction Device:"</span>
                <span>{flag(summary.device_verified, "Registered device", "Unrecognized device")}</span>
            </div>
        </div>
        <div class="card">
            <h3 class="card__title">"Merchant History"</h3>
            <div class="kv">
                <span>"Merchant Name:"</span>
                <span>{merchant.decoded_name}</span>
            </div>
            <div class="kv">
                <span>"Is Subscription:"</span>
                <span class="badge badge--outline">{flag(merchant.is_subscription, "Yes", "No")}</span>
            </div>
            <div class="kv">
                <span>"Confidence:"</span>
                <span>{percent(merchant.confidence)}</span>
            </div>
        </div>

        <div class="case-analysis__runs">
            <button class="btn" disabled=move || evidence.get().is_loading() on:click=on_run_evidence>
                "Run evidence correlation"
            </button>
            <button class="btn" disabled=move || risk.get().is_loading() on:click=on_run_risk>
                "Run risk scoring"
            </button>
        </div>

        {move || agent_section(evidence.get(), "Evidence correlation failed", |r| {
            view! { <EvidenceCorrelatorView result=r/> }.into_any()
        })}
        {move || agent_section(risk.get(), "Risk scoring failed", |r| view! { <RiskScoringView result=r/> }.into_any())}
    }
}

fn agent_section<T>(fetch: Fetch<T>, failure: &'static str, render: impl FnOnce(T) -> AnyView) -> AnyView {
    match fetch {
        Fetch::Idle => ().into_any(),
        Fetch::Loading => view! { <span class="spinner" aria-label="Loading"></span> }.into_any(),
        Fetch::Failed => view! { <p class="case-analysis__error">{failure}</p> }.into_any(),
        Fetch::Ready(value) => render(value),
    }
}

#[component]
fn TimelineTab(score: f64) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Case Timeline"</h3>
            <TimelineItem
                title="Dispute Submitted"
                time="Jan 15, 2024 2:45 PM"
                description="Customer reported unrecognized transaction"
            />
            <TimelineItem
                title="Evidence Collected"
                time="Jan 15, 2024 2:46 PM"
                description="GPS, device, and merchant data analyzed"
            />
            <TimelineItem
                title="Risk Assessment Complete"
                time="Jan 15, 2024 2:47 PM"
                description=format!("{} friendly fraud risk detected", percent(score))
            />
            <TimelineItem
                title="Pending Manual Review"
                time="Jan 15, 2024 2:48 PM"
                description="Awaiting analyst decision"
                is_last=true
            />
        </div>
        <div class="card">
            <h3 class="card__title">"Reg E Compliance Dates"</h3>
            <div class="kv">
                <span>"Submission Date:"</span>
                <span>"Jan 15, 2024"</span>
            </div>
            <div class="kv">
                <span>"Investigation Deadline:"</span>
                <span class="kv__warn">"Feb 14, 2024 (30 days)"</span>
            </div>
            <div class="kv">
                <span>"Provisional Credit Due:"</span>
                <span>"Jan 25, 2024 (10 days)"</span>
            </div>
        </div>
    }
}

#[component]
fn NotesTab(next_steps: Vec<String>) -> impl IntoView {
    let detail = expect_context::<RwSignal<CaseDetailState>>();

    view! {
        <div class="card">
            <h3 class="card__title">"Analyst Notes"</h3>
            <textarea
                class="notes"
                placeholder="Add notes about this case..."
                prop:value=move || detail.with(|d| d.notes.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    detail.update(|d| d.notes = text);
                }
            ></textarea>
        </div>
        <div class="card">
            <BulletList title="Next Steps" items=next_steps/>
        </div>
    }
}
