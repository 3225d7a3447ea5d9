//! State for the content studio pages (notes, assignments, flashcards).

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// The three kinds of generated content the platform offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Notes,
    Assignment,
    Flashcards,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Notes => "Lecture Notes",
            Self::Assignment => "Assignment",
            Self::Flashcards => "Flashcards",
        }
    }

    /// Content-shape options offered on the teacher generation form.
    pub fn shape_options(self) -> &'static [&'static str] {
        match self {
            Self::Notes => &["Concise summary", "Detailed walkthrough", "Exam-focused outline"],
            Self::Assignment => &["Short answer", "Multiple choice", "Mixed difficulty"],
            Self::Flashcards => &["Definitions", "Concept pairs", "Formula drill"],
        }
    }
}

/// A generation request assembled by the teacher form.
///
/// Carried only in client state for now — the "generate" action is a
/// simulated delay until the generation endpoints are wired up.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub id: String,
    pub kind: ContentKind,
    pub source: String,
    pub shape: String,
}

/// Per-page generation state for the teacher view.
#[derive(Clone, Debug, Default)]
pub struct GenerationState {
    pub pending: bool,
    pub last_request: Option<GenerationRequest>,
    pub completed: u32,
}

/// A placeholder content item shown in the student gallery.
///
/// No live fetch is implemented; the gallery demonstrates the read-only
/// student layout until the content endpoints are integrated.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentItem {
    pub title: String,
    pub summary: String,
}

/// Placeholder gallery items for the student view of a content page.
pub fn placeholder_items(kind: ContentKind) -> Vec<ContentItem> {
    let entries: &[(&str, &str)] = match kind {
        ContentKind::Notes => &[
            ("Week 1 — Introduction", "Core definitions and course roadmap."),
            ("Week 2 — Foundations", "Key theorems with worked examples."),
            ("Week 3 — Applications", "Case studies from the lecture recording."),
        ],
        ContentKind::Assignment => &[
            ("Problem Set 1", "Five short-answer questions on week 1 material."),
            ("Problem Set 2", "Mixed difficulty set covering weeks 2-3."),
        ],
        ContentKind::Flashcards => &[
            ("Terminology Deck", "24 cards on core vocabulary."),
            ("Formula Deck", "12 cards on the formulas used so far."),
            ("Revision Deck", "Auto-collected cards you marked for review."),
        ],
    };
    entries
        .iter()
        .map(|(title, summary)| ContentItem {
            title: (*title).to_owned(),
            summary: (*summary).to_owned(),
        })
        .collect()
}
