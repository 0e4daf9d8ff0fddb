//! Cover-image generation gateway.
//!
//! Builds a prompt from a fixed catalog of named style templates and the
//! lecture's metadata, calls the Gemini image-generation API, and returns
//! the raw base64 PNG payload. Persisting the image (or wrapping it in a
//! data URI) is the caller's concern.

mod client;
mod templates;

pub use client::{CoverGenConfig, CoverGenError, CoverGenerator, CoverRequest};
pub use templates::{build_prompt, object_description, PromptTemplate};
