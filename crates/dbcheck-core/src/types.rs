use serde::{Deserialize, Serialize};

/// Message returned when the probe query completes.
pub const CONNECTED_MESSAGE: &str = "Successfully connected to the database";

/// Message returned for every probe failure, whatever the cause.
pub const FAILED_MESSAGE: &str = "Failed to connect to the database";

/// Message shown by a status reporter when the health endpoint itself
/// could not be reached.
pub const UNREACHABLE_MESSAGE: &str = "Failed to connect to database";

/// Message shown while the check is still in flight.
pub const PENDING_MESSAGE: &str = "Checking...";

/// Outcome of a single database connectivity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityResult {
    pub message: String,
    pub success: bool,
}

impl ConnectivityResult {
    #[must_use]
    pub fn connected() -> Self {
        Self {
            message: CONNECTED_MESSAGE.to_string(),
            success: true,
        }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self {
            message: FAILED_MESSAGE.to_string(),
            success: false,
        }
    }
}

/// What a status reporter is currently displaying.
///
/// Starts as `Pending` and resolves exactly once to either `Connected` or
/// `Disconnected`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusView {
    #[default]
    Pending,
    Connected(String),
    Disconnected(String),
}

impl StatusView {
    /// Resolve from a decoded health endpoint response.
    #[must_use]
    pub fn from_result(result: ConnectivityResult) -> Self {
        if result.success {
            Self::Connected(result.message)
        } else {
            Self::Disconnected(result.message)
        }
    }

    /// Resolve after the request to the health endpoint did not complete.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::Disconnected(UNREACHABLE_MESSAGE.to_string())
    }

    /// Resolve from the outcome of fetching the health endpoint. Any fetch
    /// error lands on the disconnected fallback.
    pub fn from_fetch<E>(outcome: Result<ConnectivityResult, E>) -> Self {
        match outcome {
            Ok(result) => Self::from_result(result),
            Err(_) => Self::unreachable(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Pending => "\u{23f3}",
            Self::Connected(_) => "\u{1f7e2}",
            Self::Disconnected(_) => "\u{1f534}",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Pending => PENDING_MESSAGE,
            Self::Connected(message) | Self::Disconnected(message) => message,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

impl std::fmt::Display for StatusView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.message())
    }
}
