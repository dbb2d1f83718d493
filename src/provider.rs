use crate::error::Result;
use crate::types::ServerDescriptor;
use async_trait::async_trait;

/// MeasurementProvider: the external capability performing actual network
/// probing. Kept behind a trait so tests can substitute a deterministic
/// fake instead of hitting live servers.
#[async_trait]
pub trait MeasurementProvider: Send + Sync {
    /// Fetch the full server catalog, flattened to a plain list.
    async fn discover_servers(&self, secure: bool) -> Result<Vec<ServerDescriptor>>;

    /// Pin the given server as the active target for subsequent
    /// measurement calls.
    fn select_server(&mut self, server: &ServerDescriptor);

    /// Round-trip latency to the active target, in milliseconds.
    async fn measure_latency(&self) -> Result<f64>;

    /// Download throughput against the active target, in raw bits/sec.
    async fn measure_download(&self) -> Result<f64>;

    /// Upload throughput against the active target, in raw bits/sec.
    async fn measure_upload(&self) -> Result<f64>;
}
