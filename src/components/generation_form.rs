//! Generation configuration form for the teacher view.

use leptos::prelude::*;

use crate::state::content::{ContentKind, GenerationState};

/// Source materials offered in the selector. Placeholder list until the
/// materials endpoints are integrated.
const SOURCES: &[&str] = &[
    "Week 1 lecture recording",
    "Week 2 slide deck",
    "Uploaded PDF — chapter 3",
];

/// Teacher-side form: pick a source material and a content shape, then
/// trigger generation.
///
/// The generate action is an explicit stub — a simulated delay with no
/// backend call. The UI is complete; the integration with the generation
/// pipeline is pending.
#[component]
pub fn GenerationForm(kind: ContentKind) -> impl IntoView {
    let state = RwSignal::new(GenerationState::default());
    let source = RwSignal::new(SOURCES[0].to_owned());
    let shape = RwSignal::new(kind.shape_options()[0].to_owned());

    let on_generate = move |_| {
        if state.get_untracked().pending {
            return;
        }
        state.update(|s| s.pending = true);

        #[cfg(feature = "hydrate")]
        {
            let request = crate::state::content::GenerationRequest {
                id: uuid::Uuid::new_v4().to_string(),
                kind,
                source: source.get_untracked(),
                shape: shape.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                // Simulated latency standing in for the generation call.
                gloo_timers::future::sleep(std::time::Duration::from_millis(1200)).await;
                state.update(|s| {
                    s.pending = false;
                    s.last_request = Some(request);
                    s.completed += 1;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&source, &shape);
            state.update(|s| s.pending = false);
        }
    };

    view! {
        <div class="generation-form">
            <h2>{format!("Generate {}", kind.label())}</h2>

            <label class="generation-form__label">
                "Source material"
                <select
                    class="generation-form__select"
                    on:change=move |ev| source.set(event_target_value(&ev))
                >
                    {SOURCES
                        .iter()
                        .map(|s| view! { <option value=*s selected=move || source.get() == *s>{*s}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <fieldset class="generation-form__shapes">
                <legend>"Content shape"</legend>
                {kind
                    .shape_options()
                    .iter()
                    .map(|opt| {
                        view! {
                            <label class="generation-form__shape">
                                <input
                                    type="radio"
                                    name="shape"
                                    value=*opt
                                    checked=move || shape.get() == *opt
                                    on:change=move |ev| shape.set(event_target_value(&ev))
                                />
                                {*opt}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <button
                class="btn btn--primary"
                prop:disabled=move || state.get().pending
                on:click=on_generate
            >
                {move || if state.get().pending { "Generating..." } else { "Generate" }}
            </button>

            {move || {
                let s = state.get();
                s.last_request.map(|req| {
                    view! {
                        <p class="generation-form__status">
                            {format!(
                                "Queued {} from \"{}\" ({}). Backend integration pending. \
                                 {} queued this session.",
                                req.kind.label(),
                                req.source,
                                req.shape,
                                s.completed,
                            )}
                        </p>
                    }
                })
            }}
        </div>
    }
}
