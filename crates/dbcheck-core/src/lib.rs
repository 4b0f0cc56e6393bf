pub mod config;
pub mod error;
pub mod traits;
pub mod types;

/// Path at which the connectivity check is served.
pub const DB_CHECK_PATH: &str = "/api/db-check";

pub use config::DbConfig;
pub use error::ProbeError;
pub use traits::ConnectivityProbe;
pub use types::{ConnectivityResult, StatusView};
