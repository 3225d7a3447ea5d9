//! Route guard for the protected dashboard subtree.
//!
//! The decision itself is a pure function over the session state; the
//! component wires it to the router. The originally requested path is not
//! preserved across the redirect to `/login`.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Outcome of evaluating the guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// A token is present — render the protected subtree.
    Admit,
    /// No token — redirect to the login entry point.
    RedirectLogin,
}

impl GuardDecision {
    pub fn evaluate(state: &SessionState) -> Self {
        match state.token() {
            Some(token) if !token.is_empty() => Self::Admit,
            _ => Self::RedirectLogin,
        }
    }
}

/// Wrapper that gates its children behind an established session.
///
/// Unauthorized visitors are redirected to `/login`; the protected content
/// is never rendered for them.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && GuardDecision::evaluate(&state) == GuardDecision::RedirectLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || GuardDecision::evaluate(&session.get()) == GuardDecision::Admit>
            {children()}
        </Show>
    }
}
