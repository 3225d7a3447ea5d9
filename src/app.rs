//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RequireAuth;
use crate::pages::{
    dashboard::DashboardPage,
    landing::LandingPage,
    login::LoginPage,
    signup::SignupPage,
    studio::{AssignmentsPage, FlashcardsPage, NotesPage},
};
use crate::state::session::SessionState;

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
/// Provides the session context and sets up client-side routing. The
/// persisted session is restored from durable storage before the first
/// guard evaluation so a reload does not bounce a logged-in user.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::storage::{LocalStorage, load_session};
        if let Some(stored) = load_session(&LocalStorage) {
            session.update(|s| s.session = Some(stored));
        }
    }

    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/lectern-ui.css"/>
        <Title text="Lectern"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("notes") view=NotesPage/>
                    <Route path=StaticSegment("assignments") view=AssignmentsPage/>
                    <Route path=StaticSegment("flashcards") view=FlashcardsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout for the protected subtree: guard first, then nav and content.
#[component]
fn DashboardShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <NavBar/>
            <main class="dashboard__content">
                <Outlet/>
            </main>
        </RequireAuth>
    }
}
