use crate::error::Result;
use crate::types::ResultRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const CSV_HEADER: &str = "timestamp,city,sponsor,server,ping_ms,download_mbps,upload_mbps";

/// Append results to the CSV store at `path`.
///
/// The header row is written only when the file is empty at open time, so
/// history accumulates across runs without repeating it. Skipping the call
/// entirely on an empty batch is the caller's decision, not ours.
pub fn persist(results: &[ResultRecord], path: &Path) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    if file.metadata()?.len() == 0 {
        writeln!(file, "{}", CSV_HEADER)?;
    }

    for record in results {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.2},{:.2}",
            csv_field(&record.timestamp),
            csv_field(&record.city),
            csv_field(&record.sponsor),
            csv_field(&record.server),
            record.ping_ms,
            record.download_mbps,
            record.upload_mbps,
        )?;
    }

    Ok(())
}

/// Quote a field when it would otherwise break the row format. Sponsor
/// names with commas are common enough to need this.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
