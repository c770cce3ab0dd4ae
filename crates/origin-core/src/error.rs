//! Error types for the certificate service.
//!
//! This module defines the central `Error` enum, which captures every failure
//! that can end a certificate request. It implements [`IntoResponse`] so
//! handlers can return it directly and clients receive a non-success status
//! with a human-readable message.
//!
//! ## Error Cases
//! - `Sequence`: the allocator could not hand out a number (corrupted or
//!   unreadable counter store).
//! - `Render` / `Io`: the PDF could not be assembled or serialized.
//! - `UnknownField`: a field name did not match any certificate field.
//! - `Task`: the blocking task running the request was cancelled or panicked.
//!
//! A missing background image is deliberately absent: the renderer recovers
//! from it on its own.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the certificate service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The sequence allocator failed.
    #[error("Sequence error: {0}")]
    Sequence(#[from] origin_seq::Error),

    /// Building or serializing the PDF failed.
    #[error("Render error: {0}")]
    Render(#[from] lopdf::Error),

    /// Writing the PDF buffer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The name does not belong to any certificate field.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The task executing the request did not complete.
    #[error("Task error: {context}")]
    Task { context: String },
}

impl Error {
    pub const fn status(&self) -> StatusCode {
        match self {
            Error::Sequence(_) | Error::Render(_) | Error::Io(_) | Error::Task { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::UnknownField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
