use anyhow::bail;
use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Settings shared by both drivers, validated.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub endpoint: String,
    pub max_records: usize,
    pub delay: Duration,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl DriverConfig {
    pub fn new(
        endpoint: String,
        max_records: usize,
        delay_seconds: f64,
        timeout_seconds: f64,
        output_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        if endpoint.trim().is_empty() {
            bail!("ORIGIN_ENDPOINT must not be empty");
        }

        if max_records == 0 {
            bail!("MAX_RECORDS must be > 0");
        }

        if !delay_seconds.is_finite() || delay_seconds < 0.0 {
            bail!("DELAY_SECONDS must be a finite, non-negative number of seconds");
        }

        if !timeout_seconds.is_finite() || timeout_seconds <= 0.0 {
            bail!("TIMEOUT_SECONDS must be a finite number of seconds > 0");
        }

        if output_dir.as_os_str().is_empty() {
            bail!("OUTPUT_DIR must not be empty");
        }

        Ok(Self {
            endpoint,
            max_records,
            delay: Duration::from_secs_f64(delay_seconds),
            timeout: Duration::from_secs_f64(timeout_seconds),
            output_dir,
        })
    }
}

/// Submits the rows of a CSV file to the rendering service.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "origin-batch-csv",
    version,
    about = "Generate certificate-of-origin PDFs from the rows of a CSV file"
)]
pub struct CsvArgs {
    /// CSV file whose header row names the certificate fields.
    ///
    /// Environment variable: `CSV_FILE`
    #[arg(long, env = "CSV_FILE", default_value = "origin_data_1.csv")]
    pub csv_file: PathBuf,

    /// Generation endpoint of the rendering service.
    ///
    /// Environment variable: `ORIGIN_ENDPOINT`
    #[arg(
        long,
        env = "ORIGIN_ENDPOINT",
        default_value = "http://127.0.0.1:8000/generate-origin-pdf/"
    )]
    pub endpoint: String,

    /// Only the first rows up to this count are submitted.
    ///
    /// Environment variable: `MAX_RECORDS`
    #[arg(long, env = "MAX_RECORDS", default_value_t = 30)]
    pub max_records: usize,

    /// Pause between consecutive submissions, in seconds.
    ///
    /// Environment variable: `DELAY_SECONDS`
    #[arg(long, env = "DELAY_SECONDS", default_value_t = 2.0)]
    pub delay_seconds: f64,

    /// Per-request timeout, in seconds.
    ///
    /// Environment variable: `TIMEOUT_SECONDS`
    #[arg(long, env = "TIMEOUT_SECONDS", default_value_t = 60.0)]
    pub timeout_seconds: f64,

    /// Directory the PDFs are saved to. Created if absent.
    ///
    /// Environment variable: `OUTPUT_DIR`
    #[arg(long, env = "OUTPUT_DIR", default_value = "generated_origin_pdfs")]
    pub output_dir: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Clone)]
pub struct CsvConfig {
    pub csv_file: PathBuf,
    pub driver: DriverConfig,
    pub assume_yes: bool,
}

impl TryFrom<CsvArgs> for CsvConfig {
    type Error = anyhow::Error;

    fn try_from(args: CsvArgs) -> Result<Self, Self::Error> {
        if args.csv_file.as_os_str().is_empty() {
            bail!("CSV_FILE must not be empty");
        }

        Ok(Self {
            csv_file: args.csv_file,
            driver: DriverConfig::new(
                args.endpoint,
                args.max_records,
                args.delay_seconds,
                args.timeout_seconds,
                args.output_dir,
            )?,
            assume_yes: args.yes,
        })
    }
}

/// Submits generated records to the rendering service.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "origin-batch-synthetic",
    version,
    about = "Load the rendering service with synthetic certificate-of-origin records"
)]
pub struct SyntheticArgs {
    /// Generation endpoint of the rendering service.
    ///
    /// Environment variable: `ORIGIN_ENDPOINT`
    #[arg(
        long,
        env = "ORIGIN_ENDPOINT",
        default_value = "http://127.0.0.1:8000/generate-certificate"
    )]
    pub endpoint: String,

    /// Number of records to generate and submit.
    ///
    /// Environment variable: `MAX_RECORDS`
    #[arg(long, env = "MAX_RECORDS", default_value_t = 50)]
    pub max_records: usize,

    /// Pause between consecutive submissions, in seconds.
    ///
    /// Environment variable: `DELAY_SECONDS`
    #[arg(long, env = "DELAY_SECONDS", default_value_t = 1.5)]
    pub delay_seconds: f64,

    /// Per-request timeout, in seconds.
    ///
    /// Environment variable: `TIMEOUT_SECONDS`
    #[arg(long, env = "TIMEOUT_SECONDS", default_value_t = 60.0)]
    pub timeout_seconds: f64,

    /// Directory the PDFs are saved to. Created if absent.
    ///
    /// Environment variable: `OUTPUT_DIR`
    #[arg(long, env = "OUTPUT_DIR", default_value = "generated_pdfs")]
    pub output_dir: PathBuf,

    /// Seed for the record generator. Random when unset.
    ///
    /// Environment variable: `SEED`
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub driver: DriverConfig,
    pub seed: Option<u64>,
}

impl TryFrom<SyntheticArgs> for SyntheticConfig {
    type Error = anyhow::Error;

    fn try_from(args: SyntheticArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            driver: DriverConfig::new(
                args.endpoint,
                args.max_records,
                args.delay_seconds,
                args.timeout_seconds,
                args.output_dir,
            )?,
            seed: args.seed,
        })
    }
}
