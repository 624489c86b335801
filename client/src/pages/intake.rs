//! Customer intake chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! The customer describes the disputed charge; the case-manager agent
//! creates a case from the narrative. After a successful reply the page
//! waits a moment so the customer can read it, then hands the analysis to
//! the shell.

use cases::intake::{QUICK_REPLIES, Speaker};
use leptos::prelude::*;

use crate::components::transaction_card::TransactionCard;
use crate::state::intake::IntakeState;
use crate::state::shell::ShellState;

#[component]
pub fn IntakePage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let intake = RwSignal::new(IntakeState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = intake.with(|s| s.transcript.len());
        let _ = intake.with(|s| s.pending);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move |text: String| {
        let Some(message) = intake.try_update(|s| s.begin_send(&text)).flatten() else {
            return;
        };
        submit(intake, shell, message);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send(intake.get_untracked().input);
        }
    };

    view! {
        <div class="intake-page">
            <div class="intake-page__pinned">
                <TransactionCard/>
            </div>

            <div class="intake-page__messages" node_ref=messages_ref>
                {move || {
                    intake
                        .get()
                        .transcript
                        .into_iter()
                        .map(|entry| {
                            let is_user = entry.speaker == Speaker::User;
                            view! {
                                <div class="chat-row" class:chat-row--user=is_user>
                                    <div class="chat-bubble" class:chat-bubble--user=is_user>
                                        <p>{entry.text}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || intake.with(|s| s.pending)>
                    <div class="chat-row">
                        <div class="chat-bubble">
                            <span class="spinner" aria-label="Waiting for reply"></span>
                        </div>
                    </div>
                </Show>
                <Show when=move || intake.with(IntakeState::show_quick_replies)>
                    <div class="intake-page__quick-replies">
                        {QUICK_REPLIES
                            .into_iter()
                            .map(|reply| {
                                view! {
                                    <button class="btn btn--outline" on:click=move |_| send(reply.to_owned())>
                                        {reply}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>

            <div class="intake-page__input">
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || intake.with(|s| s.input.clone())
                    disabled=move || intake.with(|s| s.pending)
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        intake.update(|s| s.input = text);
                    }
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    disabled=move || !intake.with(IntakeState::can_send)
                    on:click=move |_| send(intake.get_untracked().input)
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Call the case-manager agent with `message` and settle the transcript.
fn submit(intake: RwSignal<IntakeState>, shell: RwSignal<ShellState>, message: String) {
    #[cfg(feature = "hydrate")]
    {
        use cases::AgentKind;
        use cases::intake::SUBMIT_TRANSITION_DELAY_MS;

        leptos::task::spawn_local(async move {
            let envelope = crate::net::api::call_agent(AgentKind::CaseManager, &message).await;
            if let Err(e) = &envelope {
                log::warn!("case-manager call failed: {e}");
            }
            let now = crate::util::clock::now_ms();
            let Some(result) = intake
                .try_update(|s| s.finish(envelope.as_ref().ok(), now))
                .flatten()
            else {
                return;
            };
            gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_TRANSITION_DELAY_MS)).await;
            let _ = shell.try_update(|s| s.on_case_submitted(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, shell);
        intake.update(|s| {
            s.finish(None, crate::util::clock::now_ms());
        });
    }
}
