use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use netwatch::config::MonitorConfig;
use netwatch::monitor::{History, Reporter};
use netwatch::storage::DataStore;

#[derive(Parser)]
#[command(name = "netwatch-report")]
#[command(about = "Summarize a day of persisted netwatch samples", long_about = None)]
struct Cli {
    /// Directory holding the daily sample logs.
    #[arg(short, long, default_value = "network_data")]
    data_dir: PathBuf,

    /// Day to summarize (YYYYMMDD). Defaults to today.
    #[arg(long, value_parser = parse_day)]
    date: Option<String>,

    /// Sites to report uptime for. Defaults to the monitor's default site list.
    #[arg(short, long = "site")]
    sites: Vec<String>,

    /// Also save the report next to the logs.
    #[arg(long)]
    save: bool,
}

fn parse_day(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map(|_| value.to_string())
        .map_err(|e| format!("expected YYYYMMDD: {e}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let store = DataStore::new(&cli.data_dir);

    let day = cli.date.unwrap_or_else(|| Local::now().format("%Y%m%d").to_string());
    let path = store.daily_log_path(&day);
    let samples = store.read_samples(&path)?;
    let total = samples.len();

    // Replay through the rolling window so the report matches what the
    // daemon would have produced at the end of that log.
    let history = History::from_samples(samples);

    let sites = if cli.sites.is_empty() {
        MonitorConfig::default().probes.sites
    } else {
        cli.sites
    };
    let now = Local::now();
    let report = Reporter::new(sites).summarize(&history, now);

    println!("{report}");
    eprintln!(
        "\n{} samples in {}, last {} summarized",
        total,
        path.display(),
        history.len()
    );

    if cli.save {
        let saved = store.write_report(&now.format("%Y%m%d_%H%M%S").to_string(), &report)?;
        eprintln!("Report saved to {}", saved.display());
    }

    Ok(())
}
