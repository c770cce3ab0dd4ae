use super::handler::*;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use origin_core::{
    Field, Renderer, SubmissionRecord,
    origin_seq::{FileStore, LockSequenceAllocator},
};
use std::{collections::HashSet, path::Path};
use tower::ServiceExt;

fn record() -> SubmissionRecord {
    let mut record = SubmissionRecord::default();
    for field in Field::ALL {
        *record.get_mut(field) = format!("{field} value");
    }
    record
}

fn app(dir: &Path) -> Router {
    let allocator = LockSequenceAllocator::new(FileStore::new(dir.join("counter.txt")));
    let renderer = Renderer::new(dir.join("missing.jpg"));
    router(CertificateService::new(allocator, renderer))
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn generate_request() -> Request<Body> {
    post_json(GENERATE_ROUTE, &serde_json::to_value(record()).unwrap())
}

fn disposition(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn issues_sequential_attachments() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    for expected in 1..=3 {
        let response = app.clone().oneshot(generate_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PDF_CONTENT_TYPE
        );
        assert_eq!(
            disposition(&response),
            format!("attachment; filename=origin_certificate_{expected}.pdf")
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF-"));
    }

    let stored = std::fs::read_to_string(dir.path().join("counter.txt")).unwrap();
    assert_eq!(stored.trim(), "4");
}

#[tokio::test]
async fn alias_route_shares_the_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let first = app.clone().oneshot(generate_request()).await.unwrap();
    assert_eq!(disposition(&first), "attachment; filename=origin_certificate_1.pdf");

    let body = serde_json::to_value(record()).unwrap();
    let second = app
        .oneshot(post_json(GENERATE_ALIAS_ROUTE, &body))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(disposition(&second), "attachment; filename=origin_certificate_2.pdf");
}

#[tokio::test]
async fn missing_field_is_rejected_without_consuming_a_number() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let mut body = serde_json::to_value(record()).unwrap();
    body.as_object_mut().unwrap().remove("consignee");

    let response = app
        .clone()
        .oneshot(post_json(GENERATE_ROUTE, &body))
        .await
        .unwrap();
    assert!(response.status().is_client_error(), "{}", response.status());
    assert!(!dir.path().join("counter.txt").exists());

    let response = app.oneshot(generate_request()).await.unwrap();
    assert_eq!(disposition(&response), "attachment; filename=origin_certificate_1.pdf");
}

#[tokio::test]
async fn corrupted_counter_fails_the_request() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("counter.txt"), "twelve").unwrap();
    let app = app(dir.path());

    let response = app.oneshot(generate_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).starts_with("Sequence error"));

    let stored = std::fs::read_to_string(dir.path().join("counter.txt")).unwrap();
    assert_eq!(stored, "twelve");
}

#[tokio::test]
async fn large_corrupted_counter_is_not_echoed() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = "secret-".repeat(1_000);
    std::fs::write(dir.path().join("counter.txt"), &garbage).unwrap();
    let app = app(dir.path());

    let response = app.oneshot(generate_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.len() < 256, "body is {} bytes", body.len());
    assert!(String::from_utf8_lossy(&body).contains("..."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_receive_distinct_numbers() {
    const REQUESTS: usize = 16;

    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path());

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = app.oneshot(generate_request()).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                disposition(&response).to_string()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        assert!(seen.insert(handle.await.unwrap()));
    }

    let expected: HashSet<_> = (1..=REQUESTS)
        .map(|n| format!("attachment; filename=origin_certificate_{n}.pdf"))
        .collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(dir.path())
        .oneshot(
            Request::builder()
                .uri(HEALTH_ROUTE)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}
