use async_trait::async_trait;

use crate::error::ProbeError;
use crate::types::ConnectivityResult;

/// Something that can tell whether the configured database is reachable
/// and answering queries.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Acquire a connection, run a liveness query, release the connection.
    async fn probe(&self) -> Result<(), ProbeError>;

    /// Run [`probe`](Self::probe) and collapse the outcome into a
    /// [`ConnectivityResult`]. Failures are logged here and never propagate.
    async fn check(&self) -> ConnectivityResult {
        match self.probe().await {
            Ok(()) => ConnectivityResult::connected(),
            Err(e) => {
                tracing::error!(kind = e.kind(), "Database connectivity check failed: {e}");
                ConnectivityResult::failed()
            }
        }
    }
}
