use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures that abort a whole batch run.
///
/// Per-record problems never surface here; they are counted in the
/// [`BatchReport`](crate::BatchReport) instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error reading CSV file '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Why a single submission did not produce a saved document.
#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected content type '{content_type}'")]
    ContentType { content_type: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
