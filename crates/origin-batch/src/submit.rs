use crate::{Result, SubmitError, Submission};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use std::{future::Future, time::Duration};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Sends one submission and returns the rendered document.
///
/// Implementations must only return `Ok` for a successful response carrying
/// a PDF; every other outcome is a [`SubmitError`].
pub trait Submitter {
    fn submit(
        &self,
        submission: &Submission,
    ) -> impl Future<Output = Result<Bytes, SubmitError>> + Send;
}

/// Posts submissions as JSON to the rendering service.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Builds a client whose every request is bounded by `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<Bytes, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if !content_type.contains(PDF_CONTENT_TYPE) {
            return Err(SubmitError::ContentType { content_type });
        }

        Ok(response.bytes().await?)
    }
}
