//! Right dashboard column: analyst decision actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picking an action reveals a notes box and a confirm button. Confirming
//! updates the local queue first, then records the disposition with the
//! server and, for approve/deny, asks the resolution agent to file the
//! outcome. Both calls are best-effort: a failure is logged and the shell
//! still moves on.

use cases::{AnalystAction, CaseRecord};
use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::shell::ShellState;

#[component]
pub fn ActionPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let shell = expect_context::<RwSignal<ShellState>>();

    let chosen = RwSignal::new(None::<AnalystAction>);
    let notes = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_confirm = move |_| {
        let Some(action) = chosen.get_untracked() else {
            return;
        };
        if submitting.get_untracked() {
            return;
        }
        let Some(selected) = dashboard.with_untracked(DashboardState::selected_record) else {
            return;
        };
        let updated = match dashboard.try_update(|d| d.apply_action(&selected.id, action)) {
            Some(Ok(record)) => record,
            _ => selected,
        };
        submitting.set(true);
        confirm(shell, action, updated, notes.get_untracked(), move || {
            let _ = chosen.try_set(None);
            let _ = notes.try_set(String::new());
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <div class="action-panel">
            <h3 class="action-panel__title">"Decision Actions"</h3>
            <div class="action-panel__buttons">
                {AnalystAction::ALL
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class=format!("btn action-panel__action action-panel__action--{}", action.as_str())
                                class:btn--active=move || chosen.get() == Some(action)
                                on:click=move |_| chosen.set(Some(action))
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || chosen.get().is_some()>
                <div class="action-panel__confirm">
                    <p class="action-panel__prompt">"Add decision notes:"</p>
                    <textarea
                        placeholder="Explain your decision..."
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" disabled=move || submitting.get() on:click=on_confirm>
                        {move || if submitting.get() { "Recording..." } else { "Confirm Decision" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Record `action` for `record` and hand the result to the shell. `done`
/// runs once every call has settled.
fn confirm(
    shell: RwSignal<ShellState>,
    action: AnalystAction,
    record: CaseRecord,
    notes: String,
    done: impl FnOnce() + 'static,
) {
    #[cfg(feature = "hydrate")]
    {
        use cases::AgentKind;
        use cases::agent::ResolutionResult;

        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::record_disposition(&record.id, action, &notes).await {
                log::warn!("disposition for {} not recorded: {e}", record.id);
            }
            let resolution = if action.outcome().is_some() {
                let prompt = action.resolution_prompt(&record, &notes);
                match crate::net::api::call_agent(AgentKind::Resolution, &prompt).await {
                    Ok(envelope) => envelope.any_result::<ResolutionResult>(),
                    Err(e) => {
                        log::warn!("resolution agent failed for {}: {e}", record.id);
                        None
                    }
                }
            } else {
                None
            };
            done();
            let _ = shell.try_update(|s| s.on_action_confirmed(action, record, resolution));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notes;
        done();
        shell.update(|s| {
            s.on_action_confirmed(action, record, None);
        });
    }
}
