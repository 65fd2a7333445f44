use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{RateLimiter, clock};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

pub type WriteRateLimiter = RateLimiter<NotKeyed, InMemoryState, clock::DefaultClock, NoOpMiddleware>;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum AdmissionControlError {
    #[error("Cannot proceed, admission control blocked after several tries")]
    CannotProceedAfterSeveralTries,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageResourceKind {
    Bucket,
    Object,
}

/// Paces write calls so tests stay under Google storage write quotas.
/// Only delays the next call, a failed call is never sent again.
#[derive(Clone)]
pub struct AdmissionControl {
    bucket_write_rate_limiter: Option<Arc<WriteRateLimiter>>,
    object_write_rate_limiter: Option<Arc<WriteRateLimiter>>,
    timeout: Duration,
    poll_interval: Duration,
}

impl AdmissionControl {
    pub fn new(
        bucket_write_rate_limiter: Option<Arc<WriteRateLimiter>>,
        object_write_rate_limiter: Option<Arc<WriteRateLimiter>>,
    ) -> Self {
        Self {
            bucket_write_rate_limiter,
            object_write_rate_limiter,
            timeout: Duration::from_secs(10 * 60),
            poll_interval: Duration::from_secs(3),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    pub fn with_timeout(mut self, timeout: Duration, poll_interval: Duration) -> Self {
        self.timeout = timeout;
        self.poll_interval = poll_interval;
        self
    }

    pub fn wait_for_a_slot(&self, resource_kind: StorageResourceKind) -> Result<(), AdmissionControlError> {
        if let Some(rate_limiter) = match resource_kind {
            StorageResourceKind::Bucket => &self.bucket_write_rate_limiter,
            StorageResourceKind::Object => &self.object_write_rate_limiter,
        } {
            let start = Instant::now();

            loop {
                if rate_limiter.check().is_ok() {
                    break;
                }

                if start.elapsed() > self.timeout {
                    return Err(AdmissionControlError::CannotProceedAfterSeveralTries);
                }

                std::thread::sleep(self.poll_interval);
            }
        }

        Ok(())
    }
}
