/// Why a connectivity probe failed.
///
/// Only ever logged. Callers of the health check see a single generic
/// failure message regardless of the variant.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("database unreachable: {0}")]
    Unreachable(String),

    #[error("authentication rejected: {0}")]
    Authentication(String),

    #[error("timed out waiting for a connection: {0}")]
    Timeout(String),

    #[error("probe query failed: {0}")]
    Query(String),
}

impl ProbeError {
    /// Short, stable label for the failure class, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "unreachable",
            Self::Authentication(_) => "authentication",
            Self::Timeout(_) => "timeout",
            Self::Query(_) => "query",
        }
    }
}
