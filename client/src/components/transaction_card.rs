//! Disputed transaction pinned above the intake chat.

use cases::record::{format_usd, pinned_transaction};
use leptos::prelude::*;

#[component]
pub fn TransactionCard() -> impl IntoView {
    let tx = pinned_transaction();
    view! {
        <div class="transaction-card">
            <div class="transaction-card__row">
                <div>
                    <p class="transaction-card__caption">"Transaction"</p>
                    <p class="transaction-card__merchant">{tx.merchant}</p>
                </div>
                <div class="transaction-card__right">
                    <p class="transaction-card__amount">"-" {format_usd(tx.amount)}</p>
                    <span class="badge badge--outline">{tx.status}</span>
                </div>
            </div>
            <p class="transaction-card__date">{tx.date}</p>
        </div>
    }
}
