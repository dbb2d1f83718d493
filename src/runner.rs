use crate::error::Result;
use crate::provider::MeasurementProvider;
use crate::types::{Candidate, ResultRecord};
use crate::utils::{clip, round2};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

/// Measure the first `limit` candidates, strictly one at a time.
///
/// Concurrent runs would share the local uplink and skew each other's
/// throughput readings, so the batch is sequential by contract. The first
/// provider failure aborts the remaining candidates and propagates.
pub async fn run_speedtest(
    provider: &mut dyn MeasurementProvider,
    candidates: &[Candidate],
    limit: usize,
) -> Result<Vec<ResultRecord>> {
    let batch = &candidates[..limit.min(candidates.len())];
    let mut results = Vec::with_capacity(batch.len());

    let pb = ProgressBar::new(batch.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("|| "),
    );
    pb.set_message("Measuring...");

    pb.println(format!(
        "{:<15}  {:<30}  {:<15}  {:<25}  {:<12}  {:<12}",
        "City Name", "Sponsor", "Country", "Hostname", "Download", "Upload"
    ));

    for candidate in batch {
        provider.select_server(&candidate.server);

        let ping = provider.measure_latency().await?;
        // Raw readings are bits/sec; store Mbps
        let download = provider.measure_download().await? / 1_000_000.0;
        let upload = provider.measure_upload().await? / 1_000_000.0;

        let record = ResultRecord {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            city: candidate.label.clone(),
            sponsor: candidate.server.sponsor.clone(),
            server: candidate.server.name.clone(),
            ping_ms: round2(ping),
            download_mbps: round2(download),
            upload_mbps: round2(upload),
        };

        pb.println(format!(
            "{:<15}  {:<30}  {:<15}  {:<25}  {:<12.2}  {:<12.2}",
            clip(&record.city, 15),
            clip(&record.sponsor, 30),
            clip(&candidate.server.country, 15),
            clip(&candidate.server.host, 25),
            record.download_mbps,
            record.upload_mbps,
        ));
        pb.inc(1);

        results.push(record);
    }

    pb.finish_and_clear();
    Ok(results)
}
