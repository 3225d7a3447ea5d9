//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `content`) so individual components
//! can depend on small focused models. Each state struct is provided to the
//! component tree as an `RwSignal` context from the root `App` component.

pub mod content;
pub mod session;
