use std::sync::Arc;

use dbcheck_core::traits::ConnectivityProbe;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<dyn ConnectivityProbe>,
}
