use clap::Parser;
use origin_batch::{
    BatchDriver, CsvArgs, CsvConfig, HttpSubmitter, ResourceUsage, confirm, csv_file_name,
    init_logging, print_csv_summary, read_csv,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CsvArgs::parse();
    let config = CsvConfig::try_from(args)?;
    init_logging()?;

    tracing::info!("Starting PDF generation from {}", config.csv_file.display());
    let rows = read_csv(&config.csv_file)?;

    if rows.is_empty() {
        println!("CSV is empty. Nothing to process.");
        return Ok(());
    }

    let to_process = rows.len().min(config.driver.max_records);
    println!("Total rows in CSV: {}", rows.len());
    println!("Will process only the first {to_process} rows.");

    if !config.assume_yes
        && !confirm(
            "Continue with PDF generation (y/n)? ",
            &mut BufReader::new(tokio::io::stdin()),
            &mut tokio::io::stdout(),
        )
        .await?
    {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    let submitter = HttpSubmitter::new(&config.driver.endpoint, config.driver.timeout)?;
    let driver = BatchDriver::new(submitter, &config.driver);
    let report = driver.run(&rows, csv_file_name).await?;

    let usage = ResourceUsage::sample().await;
    print_csv_summary(&report, &usage);
    Ok(())
}
