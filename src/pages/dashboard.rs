//! Dashboard landing page, role-conditional.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::unknown_role::UnknownRolePanel;
use crate::state::session::{SessionState, ViewMode};

/// Protected landing view. The role is read once at mount and dispatched
/// exhaustively — an unrecognized role gets an explicit panel, never the
/// teacher layout.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Read once at mount.
    let state = session.get_untracked();
    let mode = ViewMode::for_state(&state);
    let greeting = state
        .session
        .as_ref()
        .map(|s| format!("Welcome, {}", s.user.display_name()))
        .unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            {match mode {
                ViewMode::Student => {
                    view! {
                        <section class="dashboard-page__intro">
                            <p>"Browse the study content your teachers have published."</p>
                            <div class="dashboard-page__cards">
                                <StudioCard href="/dashboard/notes" title="Lecture Notes" blurb="Summaries and walkthroughs per lecture."/>
                                <StudioCard href="/dashboard/assignments" title="Assignments" blurb="Practice sets for each week."/>
                                <StudioCard href="/dashboard/flashcards" title="Flashcards" blurb="Quick revision decks."/>
                            </div>
                        </section>
                    }
                        .into_any()
                }
                ViewMode::Teacher => {
                    view! {
                        <section class="dashboard-page__intro">
                            <p>"Generate study content from your course materials."</p>
                            <div class="dashboard-page__cards">
                                <StudioCard href="/dashboard/notes" title="Notes Studio" blurb="Turn a lecture into structured notes."/>
                                <StudioCard href="/dashboard/assignments" title="Assignment Studio" blurb="Build problem sets from your material."/>
                                <StudioCard href="/dashboard/flashcards" title="Flashcard Studio" blurb="Create revision decks in one click."/>
                            </div>
                        </section>
                    }
                        .into_any()
                }
                ViewMode::Unknown => view! { <UnknownRolePanel/> }.into_any(),
            }}
        </div>
    }
}

/// Link card to one of the content studios.
#[component]
fn StudioCard(href: &'static str, title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="dashboard-page__card">
            <h3>{title}</h3>
            <p>{blurb}</p>
        </A>
    }
}
