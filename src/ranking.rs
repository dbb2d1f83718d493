use crate::types::{RankingMode, ResultRecord};

/// Pick the single best record for the given mode, or None when the batch
/// is empty.
///
/// All three modes scan in original order and only replace the running
/// best on a strictly better value, so the first record achieving the
/// maximum wins ties. Balanced mode compares download first and falls
/// back to upload when downloads are exactly equal.
pub fn select_best(results: &[ResultRecord], mode: RankingMode) -> Option<&ResultRecord> {
    let mut best: Option<&ResultRecord> = None;

    for record in results {
        let better = match best {
            None => true,
            Some(current) => match mode {
                RankingMode::DownloadOptimal => record.download_mbps > current.download_mbps,
                RankingMode::UploadOptimal => record.upload_mbps > current.upload_mbps,
                RankingMode::Balanced => {
                    record.download_mbps > current.download_mbps
                        || (record.download_mbps == current.download_mbps
                            && record.upload_mbps > current.upload_mbps)
                }
            },
        };
        if better {
            best = Some(record);
        }
    }

    best
}
