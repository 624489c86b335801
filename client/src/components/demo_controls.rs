//! Floating demo navigation: jump between screens and force the outcome.

use cases::{ResolutionOutcome, Screen};
use leptos::prelude::*;

use crate::state::shell::ShellState;

#[component]
pub fn DemoControls() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    view! {
        <div class="demo-controls">
            <p class="demo-controls__title">"Demo Navigation"</p>
            <div class="demo-controls__row">
                {Screen::ALL
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <button
                                class="btn btn--small"
                                class:btn--active=move || shell.get().screen == screen
                                on:click=move |_| shell.update(|s| s.navigate(screen))
                            >
                                {screen.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || shell.get().screen == Screen::Resolution>
                <div class="demo-controls__row">
                    {ResolutionOutcome::ALL
                        .into_iter()
                        .map(|outcome| {
                            view! {
                                <button
                                    class="btn btn--small"
                                    class:btn--active=move || shell.get().outcome == outcome
                                    on:click=move |_| shell.update(|s| s.force_outcome(outcome))
                                >
                                    {outcome.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
