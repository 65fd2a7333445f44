use gcs_test_harness::object_storage::BucketDeleteStrategy;
use gcs_test_harness::object_storage::bucket_lifecycle::BucketLifecycle;
use gcs_test_harness::object_storage::errors::ObjectStorageError;
use gcs_test_harness::services::gcp::admission_control::{AdmissionControl, WriteRateLimiter};
use gcs_test_harness::services::gcp::config::ObjectStorageServiceConfig;
use gcs_test_harness::services::gcp::object_storage_service::ObjectStorageService;
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

pub const GCP_LOCATION: &str = "EUROPE-WEST9";

/// A rate limiter making sure we do not send too many bucket write requests while testing
/// Max default quotas are 0.5 RPS
/// more info here https://cloud.google.com/storage/quotas?hl=fr
pub static GCP_STORAGE_API_BUCKET_WRITE_RATE_LIMITER: Lazy<Arc<WriteRateLimiter>> =
    Lazy::new(|| Arc::from(RateLimiter::direct(Quota::per_minute(nonzero!(30_u32)))));

/// A rate limiter making sure we do not send too many object write requests while testing
/// Max default quotas are 1 RPS
/// more info here https://cloud.google.com/storage/quotas?hl=fr
pub static GCP_STORAGE_API_OBJECT_WRITE_RATE_LIMITER: Lazy<Arc<WriteRateLimiter>> =
    Lazy::new(|| Arc::from(RateLimiter::direct(Quota::per_second(nonzero!(1_u32)))));

pub fn object_storage_service() -> (Arc<ObjectStorageService>, String) {
    let config = ObjectStorageServiceConfig::from_env().expect("Cannot read GCP configuration from env");
    let project_id = config
        .project_id
        .clone()
        .expect("GCP_PROJECT_NAME should be defined in env");

    let service = ObjectStorageService::new(
        config,
        AdmissionControl::new(
            Some(GCP_STORAGE_API_BUCKET_WRITE_RATE_LIMITER.clone()),
            Some(GCP_STORAGE_API_OBJECT_WRITE_RATE_LIMITER.clone()),
        ),
    )
    .expect("Cannot initialize google object storage service");

    (Arc::new(service), project_id)
}

pub fn test_bucket_name() -> String {
    format!("test-bucket-{}", Uuid::new_v4())
}

/// Tests deleting their bucket themselves leave nothing to clean up.
pub fn delete_test_bucket(service: &Arc<ObjectStorageService>, bucket_name: &str) {
    match BucketLifecycle::new(service.clone()).delete_bucket(bucket_name, BucketDeleteStrategy::Empty) {
        Ok(()) | Err(ObjectStorageError::BucketNotFound { .. }) => {}
        Err(e) => panic!("Cannot delete test bucket `{bucket_name}` after test: {e}"),
    }
}
