//! HTTP handlers for certificate generation.
//!
//! [`CertificateService`] pairs the process-wide sequence allocator with the
//! renderer. Each request allocates exactly one number and renders exactly
//! one document; both steps are blocking (file I/O, image decoding, PDF
//! serialization) and run on Tokio's blocking pool so the async workers stay
//! free to accept connections.
//!
//! A number is consumed as soon as it is allocated. If rendering fails
//! afterwards the number is not handed back, so the sequence stays unique but
//! may have gaps.

use crate::server::telemetry::{
    increment_documents_generated, increment_request_errors, increment_requests,
    record_document_size, record_render_duration,
};
use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use origin_core::{
    Error, Renderer, Result, SubmissionRecord,
    origin_seq::{CounterStore, LockSequenceAllocator, SequenceNumber},
};
use std::{sync::Arc, time::Instant};

pub const GENERATE_ROUTE: &str = "/generate-origin-pdf/";
pub const GENERATE_ALIAS_ROUTE: &str = "/generate-certificate";
pub const HEALTH_ROUTE: &str = "/health";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A rendered certificate together with the number it was issued under.
#[derive(Debug)]
pub struct Certificate {
    pub number: SequenceNumber,
    pub pdf: Vec<u8>,
}

impl Certificate {
    pub fn filename(&self) -> String {
        format!("origin_certificate_{}.pdf", self.number)
    }
}

impl IntoResponse for Certificate {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename={}", self.filename());
        (
            [
                (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            Bytes::from(self.pdf),
        )
            .into_response()
    }
}

pub struct CertificateService<S>
where
    S: CounterStore,
{
    allocator: LockSequenceAllocator<S>,
    renderer: Arc<Renderer>,
}

impl<S> CertificateService<S>
where
    S: CounterStore + Send + 'static,
{
    pub fn new(allocator: LockSequenceAllocator<S>, renderer: Renderer) -> Self {
        Self {
            allocator,
            renderer: Arc::new(renderer),
        }
    }

    /// Allocates the next number and renders `record` under it.
    pub async fn generate(&self, record: SubmissionRecord) -> Result<Certificate> {
        let allocator = self.allocator.clone();
        let renderer = Arc::clone(&self.renderer);

        tokio::task::spawn_blocking(move || {
            let number = allocator.allocate_next()?;
            tracing::debug!(number, "allocated certificate number");
            let pdf = renderer.render(&record)?;
            Ok(Certificate { number, pdf })
        })
        .await
        .map_err(|e| Error::Task {
            context: e.to_string(),
        })?
    }
}

impl<S> Clone for CertificateService<S>
where
    S: CounterStore,
{
    fn clone(&self) -> Self {
        Self {
            allocator: self.allocator.clone(),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

/// Builds the application router with the generation routes and the health
/// check.
pub fn router<S>(service: CertificateService<S>) -> Router
where
    S: CounterStore + Send + 'static,
{
    Router::new()
        .route(GENERATE_ROUTE, post(generate_certificate::<S>))
        .route(GENERATE_ALIAS_ROUTE, post(generate_certificate::<S>))
        .route(HEALTH_ROUTE, get(health))
        .with_state(service)
}

#[tracing::instrument(skip_all, fields(number))]
async fn generate_certificate<S>(
    State(service): State<CertificateService<S>>,
    Json(record): Json<SubmissionRecord>,
) -> Result<Certificate>
where
    S: CounterStore + Send + 'static,
{
    increment_requests();
    let start = Instant::now();

    match service.generate(record).await {
        Ok(certificate) => {
            record_render_duration(start.elapsed().as_secs_f64() * 1000.0);
            record_document_size(certificate.pdf.len() as f64);
            increment_documents_generated();
            tracing::Span::current().record("number", certificate.number);
            tracing::info!(
                number = certificate.number,
                bytes = certificate.pdf.len(),
                "certificate generated"
            );
            Ok(certificate)
        }
        Err(e) => {
            increment_request_errors();
            tracing::error!(error = %e, "certificate generation failed");
            Err(e)
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
