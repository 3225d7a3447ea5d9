//! Small utilities shared across pages and components.

pub mod storage;
