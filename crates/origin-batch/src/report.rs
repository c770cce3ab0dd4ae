use crate::BatchReport;
use sysinfo::{MINIMUM_CPU_UPDATE_INTERVAL, ProcessesToUpdate, System};

/// Process and host utilization sampled at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceUsage {
    /// Resident set size of this process, in MiB. `None` if the process
    /// could not be inspected.
    pub memory_mb: Option<f64>,
    /// Global CPU utilization, in percent.
    pub cpu_percent: f32,
}

impl ResourceUsage {
    /// Takes two CPU readings one update interval apart, so this waits
    /// briefly before returning.
    pub async fn sample() -> Self {
        let mut system = System::new();

        let memory_mb = sysinfo::get_current_pid().ok().and_then(|pid| {
            system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            system
                .process(pid)
                .map(|process| process.memory() as f64 / 1024.0 / 1024.0)
        });

        system.refresh_cpu_usage();
        tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
        system.refresh_cpu_usage();

        Self {
            memory_mb,
            cpu_percent: system.global_cpu_usage(),
        }
    }
}

/// Summary printed by the CSV driver.
pub fn print_csv_summary(report: &BatchReport, usage: &ResourceUsage) {
    println!("\n=== Summary Report ===");
    println!("{:<22} {}", "Total PDFs Generated:", report.succeeded);
    println!("{:<22} {}", "Failed:", report.failed);
    println!(
        "{:<22} {:.2} seconds",
        "Time Taken:",
        report.elapsed.as_secs_f64()
    );
    match usage.memory_mb {
        Some(mb) => println!("{:<22} {mb:.2} MB", "Memory Used:"),
        None => println!("{:<22} unavailable", "Memory Used:"),
    }
    println!("{:<22} {:.1}%", "CPU Usage:", usage.cpu_percent);
}

/// Summary printed by the synthetic driver.
pub fn print_synthetic_summary(report: &BatchReport) {
    println!("\n=== Performance Summary ===");
    println!("{:<24} {}", "Success:", report.succeeded);
    println!("{:<24} {}", "Failed:", report.failed);
    println!(
        "{:<24} {:.2} seconds",
        "Total Time:",
        report.elapsed.as_secs_f64()
    );
    println!(
        "{:<24} {:.2} seconds",
        "Avg Time per Request:",
        report.average_per_request().as_secs_f64()
    );
}
