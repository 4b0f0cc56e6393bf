use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use dbcheck_core::error::ProbeError;
use dbcheck_core::traits::ConnectivityProbe;

/// Probe whose database always answers.
#[derive(Default)]
pub struct HealthyProbe {
    calls: AtomicUsize,
}

impl HealthyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectivityProbe for HealthyProbe {
    async fn probe(&self) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Probe whose database always fails with the given class of error.
pub struct FailingProbe {
    make: fn() -> ProbeError,
}

impl FailingProbe {
    pub fn new(make: fn() -> ProbeError) -> Self {
        Self { make }
    }

    pub fn refused() -> Self {
        Self::new(|| ProbeError::Unreachable("connection refused (os error 111)".to_string()))
    }

    pub fn bad_password() -> Self {
        Self::new(|| {
            ProbeError::Authentication(
                "password authentication failed for user \"dbcheck\"".to_string(),
            )
        })
    }
}

#[async_trait]
impl ConnectivityProbe for FailingProbe {
    async fn probe(&self) -> Result<(), ProbeError> {
        Err((self.make)())
    }
}
