//! Dashboard navigation bar with content links and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

/// Top navigation inside the protected dashboard shell.
///
/// Logout is best-effort against the server and unconditional locally: the
/// session is cleared and the user returned to `/login` even when the
/// backend is unreachable.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let who = move || {
        session
            .get()
            .session
            .map(|s| format!("{} ({})", s.user.display_name(), s.role))
            .unwrap_or_default()
    };

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let token = session.get_untracked().token().map(ToOwned::to_owned);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::auth::logout(token.as_deref()).await;
                // Local teardown happens regardless of the server call's outcome.
                crate::util::storage::clear_session(&crate::util::storage::LocalStorage);
                session.update(|s| s.clear());
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <nav class="nav-bar">
            <A href="/dashboard" attr:class="nav-bar__brand">
                "Lectern"
            </A>
            <div class="nav-bar__links">
                <A href="/dashboard/notes">"Notes"</A>
                <A href="/dashboard/assignments">"Assignments"</A>
                <A href="/dashboard/flashcards">"Flashcards"</A>
            </div>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{who}</span>
            <button class="btn" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
