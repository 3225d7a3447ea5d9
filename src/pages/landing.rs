//! Public marketing landing page.

use leptos::prelude::*;

/// Marketing root — the only page with no auth involvement at all.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"Lectern"</h1>
                <p>"Turn your lectures into notes, assignments, and flashcards."</p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/login">
                        "Log in"
                    </a>
                    <a class="btn" href="/signup">
                        "Sign up"
                    </a>
                </div>
            </header>
            <section class="landing-page__features">
                <div class="landing-page__feature">
                    <h3>"For teachers"</h3>
                    <p>"Upload course material and generate structured study content."</p>
                </div>
                <div class="landing-page__feature">
                    <h3>"For students"</h3>
                    <p>"Browse everything your teachers publish, in one place."</p>
                </div>
            </section>
        </div>
    }
}
