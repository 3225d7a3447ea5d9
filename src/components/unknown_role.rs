//! Panel shown when the stored role is not a recognized value.

use leptos::prelude::*;

/// Explicit dead-end for an unrecognized role.
///
/// Rendering this instead of defaulting to the teacher layout keeps the
/// privileged view unreachable through a corrupted or tampered role value.
#[component]
pub fn UnknownRolePanel() -> impl IntoView {
    view! {
        <div class="unknown-role">
            <h2>"Account role not recognized"</h2>
            <p>"Your session does not carry a valid role. Please log in again."</p>
            <a class="btn btn--primary" href="/login">
                "Back to login"
            </a>
        </div>
    }
}
