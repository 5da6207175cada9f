//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::home::HomePage;
use crate::state::{detail::DetailModalState, showcase::ShowcaseState, toast::ToastState};

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
/// Provides the state shared across sections. The showcase and its detail
/// modal live in separate sections of the page; toasts are raised by the
/// contact form and rendered once at the root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let showcase = RwSignal::new(ShowcaseState::default());
    let detail = RwSignal::new(DetailModalState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(showcase);
    provide_context(detail);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/shelter.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
