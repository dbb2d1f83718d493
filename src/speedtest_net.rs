use crate::error::{Result, SpeedtestError};
use crate::provider::MeasurementProvider;
use crate::types::ServerDescriptor;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

// A single throughput sample can legitimately take a while on a slow
// link, so this is much more generous than a plain latency timeout.
const REQUEST_TIMEOUT: u64 = 60;

const DISCOVERY_URL: &str = "https://www.speedtest.net/api/js/servers";
const LATENCY_SAMPLES: usize = 3;
const DOWNLOAD_PATH: &str = "random2500x2500.jpg";
const UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Measurement provider backed by the public speedtest.net endpoints.
///
/// Discovery uses the JSON server-list API; latency and throughput are
/// measured with timed HTTP transfers against the selected server's
/// `host:port`. Throughput comes back in raw bits per second.
pub struct SpeedtestNetProvider {
    client: Client,
    secure: bool,
    target: Option<ServerDescriptor>,
}

impl SpeedtestNetProvider {
    pub fn new(secure: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .build()?;
        Ok(Self {
            client,
            secure,
            target: None,
        })
    }

    fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// Measurement URL on the active target, e.g.
    /// `https://host:8080/speedtest/latency.txt`.
    fn target_url(&self, path: &str) -> Result<String> {
        let target = self.target.as_ref().ok_or_else(|| {
            SpeedtestError::Measurement("no server selected as measurement target".to_string())
        })?;
        Ok(format!(
            "{}://{}/speedtest/{}",
            self.scheme(),
            target.host,
            path
        ))
    }

    fn discovery_url(secure: bool) -> String {
        if secure {
            format!("{}?engine=js&https_functional=true", DISCOVERY_URL)
        } else {
            format!("{}?engine=js", DISCOVERY_URL)
        }
    }
}

#[async_trait]
impl MeasurementProvider for SpeedtestNetProvider {
    async fn discover_servers(&self, secure: bool) -> Result<Vec<ServerDescriptor>> {
        let body = self
            .client
            .get(Self::discovery_url(secure))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let servers: Vec<ServerDescriptor> = serde_json::from_str(&body)?;
        Ok(servers)
    }

    fn select_server(&mut self, server: &ServerDescriptor) {
        self.target = Some(server.clone());
    }

    async fn measure_latency(&self) -> Result<f64> {
        let url = self.target_url("latency.txt")?;
        let mut best = f64::INFINITY;

        for _ in 0..LATENCY_SAMPLES {
            let start = Instant::now();
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            if elapsed_ms < best {
                best = elapsed_ms;
            }
        }

        Ok(best)
    }

    async fn measure_download(&self) -> Result<f64> {
        let url = self.target_url(DOWNLOAD_PATH)?;

        let start = Instant::now();
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let elapsed = start.elapsed().as_secs_f64();

        Ok(body.len() as f64 * 8.0 / elapsed)
    }

    async fn measure_upload(&self) -> Result<f64> {
        let url = self.target_url("upload.php")?;
        let payload = vec![0u8; UPLOAD_BYTES];

        let start = Instant::now();
        self.client
            .post(&url)
            .body(payload)
            .send()
            .await?
            .error_for_status()?;
        let elapsed = start.elapsed().as_secs_f64();

        Ok((UPLOAD_BYTES * 8) as f64 / elapsed)
    }
}
