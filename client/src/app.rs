//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::roles::RolesPage;
use crate::state::{flash::FlashState, roles::RolesState};

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
/// Provides the shared admin stores and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let roles = RwSignal::new(RolesState::default());
    let flashes = RwSignal::new(FlashState::default());

    provide_context(roles);
    provide_context(flashes);

    view! {
        <Stylesheet id="leptos" href="/pkg/panel.css"/>
        <Title text="Panel"/>

        <Router>
            <main class="admin-layout">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=(StaticSegment("admin"), StaticSegment("roles")) view=RolesPage/>
                </Routes>
            </main>
        </Router>
    }
}
