//! Shared domain types, error taxonomy, and pure helpers for the Lectern
//! lecture-notes backend.

pub mod error;
pub mod slides;
pub mod types;
