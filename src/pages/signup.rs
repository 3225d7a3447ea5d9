//! Signup page. Success navigates to the login page; signing up does not
//! establish a session.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::auth::validate_signup;
use crate::net::types::SignupRequest;
use crate::state::session::Role;

/// Year options shown on the student form.
const YEARS: &[&str] = &["FE", "SE", "TE", "BE"];

/// Signup form for either role. The year selector only exists for students
/// and the field is omitted from teacher payloads entirely.
#[component]
pub fn SignupPage() -> impl IntoView {
    let role = RwSignal::new(Role::Student);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let year = RwSignal::new(YEARS[0].to_owned());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move || {
        let selected = role.get_untracked();
        let request = SignupRequest::new(
            first_name.get_untracked(),
            last_name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            selected,
            Some(year.get_untracked()),
        );

        if let Err(e) = validate_signup(&request) {
            error.set(Some(e.message().to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            busy.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::auth::signup(&request).await;
                busy.set(false);
                match outcome {
                    Ok(_) => {
                        error.set(None);
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.message().to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&busy, request);
        }
    };

    let on_click = move |_| submit();

    view! {
        <div class="auth-page">
            <h1>"Sign up"</h1>

            <div class="auth-page__tabs">
                <button
                    class="auth-page__tab"
                    class:auth-page__tab--active=move || role.get() == Role::Student
                    on:click=move |_| role.set(Role::Student)
                >
                    "Student"
                </button>
                <button
                    class="auth-page__tab"
                    class:auth-page__tab--active=move || role.get() == Role::Teacher
                    on:click=move |_| role.set(Role::Teacher)
                >
                    "Teacher"
                </button>
            </div>

            <ErrorBanner message=error/>

            <label class="auth-page__label">
                "First name"
                <input
                    class="auth-page__input"
                    type="text"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Last name"
                <input
                    class="auth-page__input"
                    type="text"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
            </label>
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
                />
            </label>

            <Show when=move || role.get() == Role::Student>
                <label class="auth-page__label">
                    "Year"
                    <select
                        class="auth-page__select"
                        on:change=move |ev| year.set(event_target_value(&ev))
                    >
                        {YEARS
                            .iter()
                            .map(|y| view! { <option value=*y selected=move || year.get() == *y>{*y}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </Show>

            <button
                class="btn btn--primary"
                prop:disabled=move || busy.get()
                on:click=on_click
            >
                {move || if busy.get() { "Creating account..." } else { "Sign up" }}
            </button>

            <p class="auth-page__alt">
                "Already registered? " <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
