//! Reusable UI components.

pub mod content_gallery;
pub mod error_banner;
pub mod generation_form;
pub mod nav_bar;
pub mod route_guard;
pub mod unknown_role;
