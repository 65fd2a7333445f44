use crate::services::gcp::object_storage_service::ObjectStorageServiceError;
use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ObjectStorageError {
    #[error("Cannot reach storage service: {raw_error_message:?}.")]
    CannotReachStorageService { raw_error_message: String },
    #[error("Cannot create bucket error for `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotCreateBucket {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot get bucket error for `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotGetBucket {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Bucket `{bucket_name:?}` doesn't exist.")]
    BucketNotFound { bucket_name: String },
    #[error("Bucket `{bucket_name:?}` has no labels.")]
    BucketHasNoLabels { bucket_name: String },
    #[error("Cannot delete bucket error for `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotDeleteBucket {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot list objects error for `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotListObjects {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot empty bucket error for `{bucket_name:?}`, objects not deleted: {failed_objects:?}.")]
    CannotEmptyBucket {
        bucket_name: String,
        failed_objects: Vec<FailedObjectDeletion>,
    },
    #[error("Object `{object_key:?}` doesn't exist in `{bucket_name:?}`.")]
    ObjectNotFound { bucket_name: String, object_key: String },
    #[error("Cannot read object `{object_key:?}` error in `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotReadObject {
        bucket_name: String,
        object_key: String,
        raw_error_message: String,
    },
    #[error("Cannot write object `{object_key:?}` error in `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotWriteObject {
        bucket_name: String,
        object_key: String,
        raw_error_message: String,
    },
    #[error("Cannot delete object `{object_key:?}` error in `{bucket_name:?}`: {raw_error_message:?}.")]
    CannotDeleteObject {
        bucket_name: String,
        object_key: String,
        raw_error_message: String,
    },
}

/// One object an emptying pass could not delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedObjectDeletion {
    pub object_key: String,
    pub raw_error_message: String,
}

impl From<ObjectStorageServiceError> for ObjectStorageError {
    fn from(error: ObjectStorageServiceError) -> Self {
        match error {
            ObjectStorageServiceError::CannotCreateService { raw_error_message } => {
                ObjectStorageError::CannotReachStorageService { raw_error_message }
            }
            e @ ObjectStorageServiceError::AdmissionControlCannotProceedAfterSeveralTries => {
                ObjectStorageError::CannotReachStorageService {
                    raw_error_message: e.to_string(),
                }
            }
            ObjectStorageServiceError::BucketNotFound { bucket_name } => ObjectStorageError::BucketNotFound { bucket_name },
            ObjectStorageServiceError::ObjectNotFound {
                bucket_name,
                object_key,
            } => ObjectStorageError::ObjectNotFound {
                bucket_name,
                object_key,
            },
            ObjectStorageServiceError::CannotCreateBucket {
                bucket_name,
                raw_error_message,
            } => ObjectStorageError::CannotCreateBucket {
                bucket_name,
                raw_error_message,
            },
            ObjectStorageServiceError::CannotGetBucket {
                bucket_name,
                raw_error_message,
            } => ObjectStorageError::CannotGetBucket {
                bucket_name,
                raw_error_message,
            },
            ObjectStorageServiceError::CannotDeleteBucket {
                bucket_name,
                raw_error_message,
            } => ObjectStorageError::CannotDeleteBucket {
                bucket_name,
                raw_error_message,
            },
            ObjectStorageServiceError::CannotListObjects {
                bucket_name,
                raw_error_message,
            } => ObjectStorageError::CannotListObjects {
                bucket_name,
                raw_error_message,
            },
            ObjectStorageServiceError::CannotGetObject {
                bucket_name,
                object_key,
                raw_error_message,
            } => ObjectStorageError::CannotReadObject {
                bucket_name,
                object_key,
                raw_error_message,
            },
            ObjectStorageServiceError::CannotPutObjectToBucket {
                bucket_name,
                object_key,
                raw_error_message,
            } => ObjectStorageError::CannotWriteObject {
                bucket_name,
                object_key,
                raw_error_message,
            },
            ObjectStorageServiceError::CannotDeleteObject {
                bucket_name,
                object_key,
                raw_error_message,
            } => ObjectStorageError::CannotDeleteObject {
                bucket_name,
                object_key,
                raw_error_message,
            },
        }
    }
}
