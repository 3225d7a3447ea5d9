//! Inline error banner shown next to auth forms.

use leptos::prelude::*;

/// Single error banner per form: replaced on each new attempt, hidden when
/// the signal holds `None`.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
