//! Customer-facing resolution screen.

use cases::ResolutionOutcome;
use cases::agent::ResolutionResult;
use cases::record::format_usd;
use leptos::prelude::*;

use crate::state::shell::ShellState;

#[component]
pub fn ResolutionPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let outcome = Memo::new(move |_| shell.with(|s| s.outcome));
    let approved = move || outcome.get() == ResolutionOutcome::Approved;
    let show_details = RwSignal::new(false);

    view! {
        <div class="resolution-page">
            <header class="resolution-page__header">
                <h1>"Dispute Status"</h1>
                <p>{move || format!("Case #{}", shell.with(ShellState::case_reference))}</p>
            </header>

            <div
                class="card resolution-page__status"
                class:resolution-page__status--approved=approved
                class:resolution-page__status--denied=move || !approved()
            >
                <h2>{move || outcome.get().headline()}</h2>
                <p>{move || outcome.get().subline()}</p>
            </div>

            <div class="card">
                <h3 class="card__title">"What This Means"</h3>
                <Show
                    when=approved
                    fallback=move || {
                        view! {
                            <p>
                                "After reviewing the evidence, we found that the transaction appears to be authorized. "
                                "Our investigation showed your device and location matched the transaction, suggesting "
                                "you or someone with access to your card made this purchase."
                            </p>
                            <button class="btn btn--outline" on:click=move |_| show_details.update(|v| *v = !*v)>
                                {move || if show_details.get() { "Hide Detailed Evidence" } else { "Show Detailed Evidence" }}
                            </button>
                            <Show when=move || show_details.get()>
                                <div class="resolution-page__evidence">
                                    <p class="resolution-page__evidence-title">"Location Match"</p>
                                    <p>"Your phone was within 0.1 miles of the merchant at the time of transaction"</p>
                                    <p class="resolution-page__evidence-title">"Device Match"</p>
                                    <p>"The transaction was made with your registered device"</p>
                                </div>
                            </Show>
                        }
                    }
                >
                    <p>
                        {move || {
                            format!(
                                "We have credited {} back to your account while we investigate this transaction. \
                                 This credit is provisional, meaning it will remain in your account unless our \
                                 investigation finds the transaction was authorized.",
                                format_usd(shell.with(ShellState::disputed_amount)),
                            )
                        }}
                    </p>
                    <div class="callout">
                        <p class="callout__title">"What happens next?"</p>
                        <p>
                            "We will contact the merchant and complete our investigation within 30 days. "
                            "You will keep the credit unless we find evidence the transaction was authorized."
                        </p>
                    </div>
                </Show>
            </div>

            <div class="card">
                <h3 class="card__title">"Timeline"</h3>
                <ol class="mini-timeline">
                    <li>"Dispute Submitted" <span>"January 15, 2024"</span></li>
                    <li>"Investigation Started" <span>"January 15, 2024"</span></li>
                    <li>"Decision Made" <span>"January 16, 2024"</span></li>
                    <Show when=approved>
                        <li class="mini-timeline__pending">
                            "Credit Issued" <span>"Final resolution expected by February 14, 2024"</span>
                        </li>
                    </Show>
                </ol>
            </div>

            <Show when=approved>
                <div class="card callout">
                    <p class="callout__title">"Your Rights Under Regulation E"</p>
                    <p>
                        "Under federal law, we must investigate your claim within 10 business days and "
                        "complete the investigation within 45 days. You have the right to request "
                        "documentation of our findings."
                    </p>
                </div>
            </Show>

            {move || shell.with(|s| s.resolution.clone()).map(|r| view! { <FilingDetails result=r/> })}

            <Show when=move || !approved()>
                <button class="btn btn--outline">"This doesn't seem right - Appeal Decision"</button>
            </Show>

            <div class="resolution-page__actions">
                <button class="btn btn--primary">"View Account Balance"</button>
                <button class="btn btn--outline">"Contact Support"</button>
            </div>
        </div>
    }
}

#[component]
fn FilingDetails(result: ResolutionResult) -> impl IntoView {
    let chargeback = result.resolution_details.chargeback;
    let credit = result.resolution_details.provisional_credit;

    view! {
        <div class="card">
            <h3 class="card__title">"Filing details"</h3>
            <div class="kv">
                <span>"Chargeback ID:"</span>
                <span>{chargeback.chargeback_id}</span>
            </div>
            <div class="kv">
                <span>"Reason Code:"</span>
                <span>{chargeback.reason_code}</span>
            </div>
            <div class="kv">
                <span>"Network:"</span>
                <span>{chargeback.network}</span>
            </div>
            <div class="kv">
                <span>"Expected Resolution:"</span>
                <span>{chargeback.expected_resolution_date}</span>
            </div>
            <div class="kv">
                <span>"Credit Amount:"</span>
                <span>{format_usd(credit.credit_amount)}</span>
            </div>
            <div class="kv">
                <span>"Next Review:"</span>
                <span>{result.tracking.next_review_date}</span>
            </div>
        </div>
    }
}
