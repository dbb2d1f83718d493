use serde::Deserialize;

/// One entry from the remote server catalog.
///
/// Deserialized straight from the discovery response; fields we do not
/// care about (coordinates, distance, ids) are simply ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerDescriptor {
    pub name: String,
    pub sponsor: String,
    pub country: String,
    pub host: String,
}

/// A server paired with the display label it was selected under.
///
/// The label is the requested city string when a city filter produced the
/// candidate, otherwise the server's own name. Never empty.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub label: String,
    pub server: ServerDescriptor,
}

impl Candidate {
    pub fn new(label: impl Into<String>, server: ServerDescriptor) -> Self {
        Self {
            label: label.into(),
            server,
        }
    }
}

/// One completed measurement, ready for display and persistence.
///
/// Numeric fields are non-negative and rounded to 2 decimals at
/// construction time; records are never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub timestamp: String,
    pub city: String,
    pub sponsor: String,
    pub server: String,
    pub ping_ms: f64,
    pub download_mbps: f64,
    pub upload_mbps: f64,
}

/// Criterion used to pick the single best result out of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    DownloadOptimal,
    UploadOptimal,
    Balanced,
}

impl RankingMode {
    /// Map the two CLI flags onto a mode. Download takes precedence when
    /// both are given; neither means the balanced default.
    pub fn from_flags(optimal_download: bool, optimal_upload: bool) -> Self {
        if optimal_download {
            Self::DownloadOptimal
        } else if optimal_upload {
            Self::UploadOptimal
        } else {
            Self::Balanced
        }
    }
}
