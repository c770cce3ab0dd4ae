//! # `origin-core`: certificate-of-origin records, layout and rendering
//!
//! Shared by the HTTP service and the batch drivers:
//!
//! - [`SubmissionRecord`] / [`Field`] - the 23 named text fields of one
//!   certificate.
//! - [`Layout`] / [`CERTIFICATE_LAYOUT`] - the fixed field-to-coordinate
//!   table, kept as data so it can be tested and swapped without touching the
//!   drawing code.
//! - [`wrap`] / [`pad_columns`] - character-count wrapping used by the layout.
//! - [`Renderer`] - turns a record into a single-page A4 PDF over a background
//!   image, falling back to a visible diagnostic line if the image cannot be
//!   loaded.
//! - [`Error`] - the service-facing error type, convertible into an HTTP
//!   response.

mod error;
mod layout;
mod record;
mod render;

pub use error::*;
pub use layout::*;
pub use record::*;
pub use render::*;

// Public re-export so downstream crates can reach the allocator via
// `origin_core::origin_seq`
pub use origin_seq;
