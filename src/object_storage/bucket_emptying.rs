use crate::object_storage::errors::{FailedObjectDeletion, ObjectStorageError};
use crate::services::gcp::object_storage_service::{ObjectStorageService, ObjectStorageServiceError};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptiedBucket {
    pub bucket_name: String,
    pub deleted_objects: Vec<String>,
    /// Listed objects which were already gone when deleting them.
    pub already_absent_objects: Vec<String>,
}

pub struct BucketEmptying {
    service: Arc<ObjectStorageService>,
}

impl BucketEmptying {
    pub fn new(service: Arc<ObjectStorageService>) -> Self {
        Self { service }
    }

    /// Deletes objects one by one, there is no bulk delete in the JSON API.
    /// Every listed object is attempted, failures are reported together at the end.
    pub fn empty_bucket(&self, bucket_name: &str) -> Result<EmptiedBucket, ObjectStorageError> {
        info!(bucket_name, "Emptying storage bucket {bucket_name}");

        let object_keys = self.service.list_objects_keys_only(bucket_name, None)?;

        let mut emptied_bucket = EmptiedBucket {
            bucket_name: bucket_name.to_string(),
            ..Default::default()
        };
        let mut failed_objects: Vec<FailedObjectDeletion> = vec![];

        for object_key in object_keys {
            info!(bucket_name, object_key = object_key.as_str(), "Deleting storage bucket object {object_key}");
            match self.service.delete_object(bucket_name, object_key.as_str()) {
                Ok(()) => emptied_bucket.deleted_objects.push(object_key),
                Err(ObjectStorageServiceError::ObjectNotFound { .. }) => {
                    emptied_bucket.already_absent_objects.push(object_key)
                }
                Err(e) => {
                    warn!(bucket_name, object_key = object_key.as_str(), "Cannot delete object: {e}");
                    failed_objects.push(FailedObjectDeletion {
                        object_key,
                        raw_error_message: e.to_string(),
                    });
                }
            }
        }

        if !failed_objects.is_empty() {
            return Err(ObjectStorageError::CannotEmptyBucket {
                bucket_name: bucket_name.to_string(),
                failed_objects,
            });
        }

        Ok(emptied_bucket)
    }
}
