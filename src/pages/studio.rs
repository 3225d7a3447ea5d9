//! Content pages for notes, assignments, and flashcards.
//!
//! All three share one role-conditional layout: students get a read-only
//! gallery, teachers get the generation form, and an unrecognized role gets
//! the explicit error panel.

use leptos::prelude::*;

use crate::components::content_gallery::ContentGallery;
use crate::components::generation_form::GenerationForm;
use crate::components::unknown_role::UnknownRolePanel;
use crate::state::content::ContentKind;
use crate::state::session::{SessionState, ViewMode};

/// Shared role dispatch for a content page. The role is read once at mount.
#[component]
fn StudioPage(kind: ContentKind) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let mode = ViewMode::for_state(&session.get_untracked());

    view! {
        <div class="studio-page">
            {match mode {
                ViewMode::Student => view! { <ContentGallery kind=kind/> }.into_any(),
                ViewMode::Teacher => view! { <GenerationForm kind=kind/> }.into_any(),
                ViewMode::Unknown => view! { <UnknownRolePanel/> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    view! { <StudioPage kind=ContentKind::Notes/> }
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    view! { <StudioPage kind=ContentKind::Assignment/> }
}

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    view! { <StudioPage kind=ContentKind::Flashcards/> }
}
