//! Sequential batch submission.
//!
//! [`BatchDriver::run`] submits one record at a time, waits the configured
//! delay between submissions, and saves every returned document. A record
//! that fails for any reason is logged and counted; the run always continues
//! with the next record.

use crate::{DriverConfig, Error, Result, SubmitError, Submission, Submitter};
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl BatchReport {
    /// Wall-clock time per attempted record, delays included.
    pub fn average_per_request(&self) -> Duration {
        match u32::try_from(self.attempted) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.elapsed / n,
        }
    }
}

/// File name for the `n`th (1-based) CSV row.
pub fn csv_file_name(n: usize) -> String {
    format!("origin_certificate_{n}.pdf")
}

/// File name for the `n`th (1-based) synthetic record.
pub fn synthetic_file_name(n: usize) -> String {
    format!("origin_{n}.pdf")
}

pub struct BatchDriver<S> {
    submitter: S,
    max_records: usize,
    delay: Duration,
    output_dir: PathBuf,
}

impl<S> BatchDriver<S>
where
    S: Submitter,
{
    pub fn new(submitter: S, config: &DriverConfig) -> Self {
        Self {
            submitter,
            max_records: config.max_records,
            delay: config.delay,
            output_dir: config.output_dir.clone(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Submits up to `max_records` of `submissions`, naming each saved file
    /// with `file_name(n)` where `n` is the record's 1-based position.
    ///
    /// # Errors
    ///
    /// Only a failure to create the output directory aborts the run.
    pub async fn run(
        &self,
        submissions: &[Submission],
        file_name: impl Fn(usize) -> String,
    ) -> Result<BatchReport> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| Error::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let batch = &submissions[..submissions.len().min(self.max_records)];
        let total = batch.len();
        let start = Instant::now();
        let mut succeeded = 0;
        let mut failed = 0;

        for (i, submission) in batch.iter().enumerate() {
            let n = i + 1;
            tracing::info!("Generating PDF #{n} ({n}/{total})");

            match self.submit_one(submission, &file_name(n)).await {
                Ok(path) => {
                    tracing::info!("Saved {}", path.display());
                    succeeded += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed PDF #{n}: {e}");
                    failed += 1;
                }
            }

            if n < total && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(BatchReport {
            attempted: total,
            succeeded,
            failed,
            elapsed: start.elapsed(),
        })
    }

    async fn submit_one(
        &self,
        submission: &Submission,
        file_name: &str,
    ) -> Result<PathBuf, SubmitError> {
        let pdf = self.submitter.submit(submission).await?;
        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, &pdf)
            .await
            .map_err(|source| SubmitError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}
