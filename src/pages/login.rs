//! Login page with student/teacher portal selection.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::auth::validate_login;
use crate::net::types::LoginRequest;
use crate::state::session::{Role, SessionState};

/// Login form for either portal.
///
/// The selected portal role is sent with the credentials so the backend can
/// run its role-vs-portal check, but the session role that gets persisted
/// comes from the server's response, never from this selector.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let portal = RwSignal::new(Role::Student);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |_: ()| {
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: portal.get_untracked(),
        };

        // Validation short-circuits before any network activity.
        if let Err(e) = validate_login(&request.email, &request.password) {
            error.set(Some(e.message().to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            busy.set(true);
            // Ticket for the staleness guard: only the newest attempt may
            // write the session.
            let generation = session.try_update(|s| s.begin_login()).unwrap_or_default();
            let navigate = navigate.clone();

            leptos::task::spawn_local(async move {
                let outcome = crate::net::auth::login(&request)
                    .await
                    .and_then(|resp| crate::net::auth::session_from_login(&request, resp));
                busy.set(false);

                match outcome {
                    Ok(new_session) => {
                        let applied = session
                            .try_update(|s| s.apply_login(generation, new_session.clone()))
                            .unwrap_or(false);
                        if applied {
                            crate::util::storage::save_session(
                                &crate::util::storage::LocalStorage,
                                &new_session,
                            );
                            error.set(None);
                            navigate("/dashboard", NavigateOptions::default());
                        } else {
                            leptos::logging::warn!("discarding stale login response");
                        }
                    }
                    Err(e) => {
                        error.set(Some(e.message().to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &busy, request);
        }
    });

    let on_click = move |_| submit.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit.run(());
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>

            <div class="auth-page__tabs">
                <button
                    class="auth-page__tab"
                    class:auth-page__tab--active=move || portal.get() == Role::Student
                    on:click=move |_| portal.set(Role::Student)
                >
                    "Student"
                </button>
                <button
                    class="auth-page__tab"
                    class:auth-page__tab--active=move || portal.get() == Role::Teacher
                    on:click=move |_| portal.set(Role::Teacher)
                >
                    "Teacher"
                </button>
            </div>

            <ErrorBanner message=error/>

            <label class="auth-page__label">
                "Email"
                <input
                    class="auth-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Password"
                <input
                    class="auth-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>

            <button
                class="btn btn--primary"
                prop:disabled=move || busy.get()
                on:click=on_click
            >
                {move || if busy.get() { "Logging in..." } else { "Log in" }}
            </button>

            <p class="auth-page__alt">
                "No account? " <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
