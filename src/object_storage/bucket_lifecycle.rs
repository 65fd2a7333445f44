use crate::object_storage::bucket_emptying::BucketEmptying;
use crate::object_storage::errors::ObjectStorageError;
use crate::object_storage::{BucketConfiguration, BucketCreationConfiguration, BucketDeleteStrategy};
use crate::services::gcp::object_storage_service::{ObjectStorageService, ObjectStorageServiceError};
use std::sync::Arc;
use tracing::info;

/// Creates, deletes and finds buckets.
pub struct BucketLifecycle {
    service: Arc<ObjectStorageService>,
}

impl BucketLifecycle {
    pub fn new(service: Arc<ObjectStorageService>) -> Self {
        Self { service }
    }

    /// Bucket names are global to all Google storage users, creation fails on collision.
    pub fn create_bucket(
        &self,
        project_id: &str,
        bucket_name: &str,
        configuration: &BucketCreationConfiguration,
    ) -> Result<BucketConfiguration, ObjectStorageError> {
        info!(project_id, bucket_name, location = configuration.location.as_str(), "Creating bucket {bucket_name}");

        Ok(self.service.create_bucket(project_id, bucket_name, configuration)?)
    }

    pub fn delete_bucket(
        &self,
        bucket_name: &str,
        bucket_delete_strategy: BucketDeleteStrategy,
    ) -> Result<(), ObjectStorageError> {
        info!(bucket_name, "Deleting bucket {bucket_name}");

        if bucket_delete_strategy == BucketDeleteStrategy::Empty {
            BucketEmptying::new(self.service.clone()).empty_bucket(bucket_name)?;
        }

        Ok(self.service.delete_bucket(bucket_name)?)
    }

    /// Only a missing bucket answers `false`, any other failure is an error.
    pub fn bucket_exists(&self, bucket_name: &str) -> Result<bool, ObjectStorageError> {
        match self.service.get_bucket(bucket_name) {
            Ok(_) => Ok(true),
            Err(ObjectStorageServiceError::BucketNotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// A bucket exists when its attributes can be fetched.
    pub fn check_bucket_exists(&self, bucket_name: &str) -> Result<BucketConfiguration, ObjectStorageError> {
        info!(bucket_name, "Finding bucket {bucket_name}");

        Ok(self.service.get_bucket(bucket_name)?)
    }
}
