use clap::Parser;
use origin_batch::{
    BatchDriver, HttpSubmitter, SyntheticArgs, SyntheticConfig, SyntheticSource, init_logging,
    print_synthetic_summary, synthetic_file_name,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = SyntheticArgs::parse();
    let config = SyntheticConfig::try_from(args)?;
    init_logging()?;

    let mut source = match config.seed {
        Some(seed) => SyntheticSource::seeded(seed, chrono::Local::now().date_naive()),
        None => SyntheticSource::from_entropy(),
    };
    let submissions = source.take(config.driver.max_records);

    tracing::info!(
        "Submitting {} synthetic records to {}",
        submissions.len(),
        config.driver.endpoint
    );

    let submitter = HttpSubmitter::new(&config.driver.endpoint, config.driver.timeout)?;
    let driver = BatchDriver::new(submitter, &config.driver);
    let report = driver.run(&submissions, synthetic_file_name).await?;

    print_synthetic_summary(&report);
    Ok(())
}
