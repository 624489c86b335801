//! Left dashboard column: search, status filter, sort, and the queue rows.

use cases::queue::{SortKey, StatusFilter};
use cases::record::format_usd;
use cases::{CaseRecord, RiskLevel};
use leptos::prelude::*;

use crate::components::risk_badge::RiskBadge;
use crate::state::dashboard::DashboardState;

#[component]
pub fn CaseQueue() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let on_status = move |ev| {
        let raw = event_target_value(&ev);
        if let Ok(status) = raw.parse::<StatusFilter>() {
            dashboard.update(|d| d.view.status = status);
        }
    };
    let on_sort = move |ev| {
        let raw = event_target_value(&ev);
        if let Ok(sort) = raw.parse::<SortKey>() {
            dashboard.update(|d| d.view.sort = sort);
        }
    };

    view! {
        <div class="case-queue">
            <div class="case-queue__controls">
                <input
                    class="case-queue__search"
                    type="search"
                    placeholder="Search cases..."
                    prop:value=move || dashboard.get().view.query
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        dashboard.update(|d| d.view.query = query);
                    }
                />
                <div class="case-queue__selects">
                    <select on:change=on_status>
                        {StatusFilter::options()
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <option
                                        value=filter.as_str()
                                        selected=move || dashboard.get().view.status == filter
                                    >
                                        {filter.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <select on:change=on_sort>
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| {
                                view! {
                                    <option value=key.as_str() selected=move || dashboard.get().view.sort == key>
                                        {key.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="case-queue__rows">
                {move || {
                    let state = dashboard.get();
                    state
                        .visible()
                        .into_iter()
                        .map(|record| {
                            let selected = state.is_selected(&record.id);
                            view! { <CaseRow record selected/> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn CaseRow(record: CaseRecord, selected: bool) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let id = record.id.clone();
    let level = RiskLevel::from_percent(f64::from(record.risk_score));

    view! {
        <div
            class="case-row"
            class:case-row--selected=selected
            on:click=move |_| {
                let id = id.clone();
                dashboard.update(|d| d.select(id));
            }
        >
            <div class="case-row__head">
                <div>
                    <p class="case-row__customer">{record.customer_name}</p>
                    <p class="case-row__id">{record.id.clone()}</p>
                </div>
                <RiskBadge level text=format!("{}%", record.risk_score)/>
            </div>
            <p class="case-row__merchant">{record.merchant}</p>
            <div class="case-row__meta">
                <span>{format_usd(record.amount)}</span>
                <span>{record.date}</span>
            </div>
            <span class="badge badge--outline">{record.status.as_str()}</span>
        </div>
    }
}
