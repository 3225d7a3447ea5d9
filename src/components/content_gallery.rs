//! Read-only content gallery for the student view.

use leptos::prelude::*;

use crate::state::content::{ContentKind, placeholder_items};

/// Gallery of content cards for students.
///
/// Shows placeholder items until the content retrieval endpoints are
/// integrated; there is no live fetch here yet.
#[component]
pub fn ContentGallery(kind: ContentKind) -> impl IntoView {
    let items = placeholder_items(kind);

    view! {
        <div class="content-gallery">
            <h2>{kind.label()}</h2>
            <div class="content-gallery__cards">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="content-gallery__card">
                                <h3>{item.title}</h3>
                                <p>{item.summary}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
