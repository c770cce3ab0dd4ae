//! # `origin-batch`: batch drivers for the certificate service
//!
//! Submits certificate records to a running `origin-server` one at a time
//! and saves every returned PDF. Two sources are provided:
//!
//! - [`read_csv`] - one record per row of a CSV file whose header names the
//!   fields (binary `origin-batch-csv`).
//! - [`SyntheticSource`] - generated, optionally seeded records (binary
//!   `origin-batch-synthetic`).
//!
//! Both feed the same [`BatchDriver`], which talks to the service through the
//! [`Submitter`] trait ([`HttpSubmitter`] in production) and returns a
//! [`BatchReport`] of attempted, succeeded and failed submissions.

mod config;
mod driver;
mod error;
mod prompt;
mod report;
mod source;
mod submission;
mod submit;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use prompt::*;
pub use report::*;
pub use source::*;
pub use submission::*;
pub use submit::*;

/// Console logging for the driver binaries.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .try_init()?;
    Ok(())
}
