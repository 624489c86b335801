//! Analyst review dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three columns: the case queue, the selected case's analysis, and the
//! decision actions. Queue, selection, and detail state live here and are
//! provided to the column components.

use leptos::prelude::*;

use crate::components::action_panel::ActionPanel;
use crate::components::case_detail::CaseDetail;
use crate::components::case_queue::CaseQueue;
use crate::state::case_detail::CaseDetailState;
use crate::state::dashboard::DashboardState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState::default());
    let detail = RwSignal::new(CaseDetailState::default());
    provide_context(dashboard);
    provide_context(detail);

    let has_selection = move || dashboard.with(|d| d.selected.is_some());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Dispute Review Dashboard"</h1>
                    <p class="dashboard-page__subtitle">"Analyst Portal"</p>
                </div>
                <span class="badge badge--outline">
                    {move || format!("{} Active Cases", dashboard.with(DashboardState::visible_count))}
                </span>
            </header>

            <div class="dashboard-page__columns">
                <aside class="dashboard-page__queue">
                    <CaseQueue/>
                </aside>
                <main class="dashboard-page__detail">
                    <Show
                        when=has_selection
                        fallback=|| {
                            view! {
                                <div class="dashboard-page__placeholder">
                                    <p class="dashboard-page__placeholder-title">"Select a case to review"</p>
                                    <p>"Choose a case from the queue to see details"</p>
                                </div>
                            }
                        }
                    >
                        <CaseDetail/>
                    </Show>
                </main>
                <aside class="dashboard-page__actions">
                    <Show
                        when=has_selection
                        fallback=|| view! { <p class="dashboard-page__placeholder">"No case selected"</p> }
                    >
                        <ActionPanel/>
                    </Show>
                </aside>
            </div>
        </div>
    }
}
