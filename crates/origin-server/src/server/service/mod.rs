//! HTTP service implementation.
//!
//! ## Structure
//!
//! - [`handler`] - routes, the request handler and [`handler::CertificateService`].

pub mod handler;

#[cfg(test)]
mod tests;
