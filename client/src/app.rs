//! Root application component with routing and the screen shell.

use cases::Screen;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::demo_controls::DemoControls;
use crate::pages::{dashboard::DashboardPage, intake::IntakePage, resolution::ResolutionPage};
use crate::state::shell::ShellState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shell state and mounts the desk at `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(ShellState::default());
    provide_context(shell);

    view! {
        <Stylesheet id="leptos" href="/pkg/dispute-desk.css"/>
        <Title text="Dispute Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Desk/>
            </Routes>
        </Router>
    }
}

/// Renders the current screen plus the demo navigation overlay.
#[component]
fn Desk() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let screen = Memo::new(move |_| shell.with(|s| s.screen));

    view! {
        {move || match screen.get() {
            Screen::Intake => view! { <IntakePage/> }.into_any(),
            Screen::Dashboard => view! { <DashboardPage/> }.into_any(),
            Screen::Resolution => view! { <ResolutionPage/> }.into_any(),
        }}
        <DemoControls/>
    }
}
