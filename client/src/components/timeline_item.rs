//! One milestone row in a vertical timeline.

use leptos::prelude::*;

#[component]
pub fn TimelineItem(
    #[prop(into)] title: String,
    #[prop(into)] time: String,
    #[prop(into)] description: String,
    #[prop(optional)] is_last: bool,
) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <div class="timeline-item__rail">
                <span class="timeline-item__dot"></span>
                <Show when=move || !is_last>
                    <span class="timeline-item__line"></span>
                </Show>
            </div>
            <div class="timeline-item__body">
                <p class="timeline-item__title">{title}</p>
                <p class="timeline-item__time">{time}</p>
                <p class="timeline-item__description">{description}</p>
            </div>
        </div>
    }
}
