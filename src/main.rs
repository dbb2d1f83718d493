mod error;
mod filter;
mod provider;
mod ranking;
mod runner;
mod sink;
mod speedtest_net;
mod types;
mod utils;

use anyhow::Result;
use clap::Parser;
use provider::MeasurementProvider;
use speedtest_net::SpeedtestNetProvider;
use std::path::PathBuf;
use types::RankingMode;
use utils::clip;

#[derive(Parser)]
#[command(name = "speedpick")]
#[command(about = "Run speed tests against nearby servers and pick the best one", long_about = None)]
struct Cli {
    /// Country to search servers in
    #[arg(long, default_value = "Pakistan")]
    country: String,

    /// Optional list of city names
    #[arg(long, num_args = 0..)]
    cities: Vec<String>,

    /// Pick best server by download speed
    #[arg(long = "optimalDownload")]
    optimal_download: bool,

    /// Pick best server by upload speed
    #[arg(long = "optimalUpload")]
    optimal_upload: bool,

    /// How many servers to measure at most
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    limit: u64,

    /// List all available servers instead of measuring
    #[arg(long)]
    servers: bool,

    /// CSV file results are appended to
    #[arg(long, default_value = "speedtest_results.csv")]
    output: PathBuf,

    /// Use plain http towards measurement hosts
    #[arg(long)]
    insecure: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let secure = !cli.insecure;
    let mut provider = SpeedtestNetProvider::new(secure)?;

    if cli.servers {
        handle_list_servers(&provider, secure).await?;
        return Ok(());
    }

    handle_run(&mut provider, &cli, secure).await
}

// --- Handlers ---

async fn handle_list_servers(provider: &dyn MeasurementProvider, secure: bool) -> Result<()> {
    let catalog = provider.discover_servers(secure).await?;

    println!(
        "{:<20}  {:<30}  {:<20}  {:<35}",
        "City Name", "Sponsor", "Country", "Hostname"
    );
    println!("{}", "-".repeat(110));

    for server in &catalog {
        println!(
            "{:<20}  {:<30}  {:<20}  {:<35}",
            clip(&server.name, 20),
            clip(&server.sponsor, 30),
            clip(&server.country, 20),
            clip(&server.host, 35),
        );
    }

    Ok(())
}

async fn handle_run(provider: &mut dyn MeasurementProvider, cli: &Cli, secure: bool) -> Result<()> {
    let catalog = provider.discover_servers(secure).await?;
    let candidates = filter::filter_candidates(&catalog, &cli.country, &cli.cities);

    if candidates.is_empty() {
        // Valid "no results" outcome: warn and exit normally, nothing to
        // measure or persist.
        println!("No servers found in {} for given cities.", cli.country);
        return Ok(());
    }

    let results = runner::run_speedtest(provider, &candidates, cli.limit as usize).await?;

    let mode = RankingMode::from_flags(cli.optimal_download, cli.optimal_upload);
    if let Some(best) = ranking::select_best(&results, mode) {
        println!();
        println!(
            "Best Server: {} ({}, {})",
            best.server, best.city, best.sponsor
        );
        println!(
            "  - Download: {} Mbps | Upload: {} Mbps",
            best.download_mbps, best.upload_mbps
        );
    }

    // Persistence failures are downgraded to a message; the measurements
    // already on screen are worth more than a clean exit code here.
    match sink::persist(&results, &cli.output) {
        Ok(()) => {
            println!();
            println!("Results saved to {}", cli.output.display());
        }
        Err(e) => println!("Error saving results: {}", e),
    }

    Ok(())
}
