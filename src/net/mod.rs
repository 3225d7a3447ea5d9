//! Network layer for the backend HTTP API.
//!
//! Real HTTP calls happen only on the client (`hydrate`); response
//! normalization lives in pure helpers so the error taxonomy is testable
//! on the native target without a browser.

pub mod auth;
pub mod error;
pub mod types;

/// Prefix for every backend call.
pub const API_BASE: &str = "/api/v1";
