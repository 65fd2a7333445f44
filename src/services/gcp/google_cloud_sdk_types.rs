//! Conversions between this crate's bucket types and the `google-cloud-storage` SDK ones,
//! plus credentials file construction and not found detection.

use crate::models::gcp::{CredentialsError, JsonCredentials};
use crate::object_storage::{BucketConfiguration, BucketCreationConfiguration};
use crate::runtime::block_on;
use google_cloud_storage::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_storage::http::Error as HttpError;
use google_cloud_storage::http::buckets::insert::BucketCreationConfig;
use google_cloud_storage::http::buckets::{Bucket as GcpBucket, Versioning};

pub fn new_gcp_credentials_file_from_credentials(
    credentials: &JsonCredentials,
) -> Result<CredentialsFile, CredentialsError> {
    block_on(CredentialsFile::new_from_str(credentials.to_json_string()?.as_str())).map_err(|e| {
        CredentialsError::CannotCreateCredentials {
            raw_error_message: e.to_string(),
        }
    })
}

pub fn is_not_found_error(error: &HttpError) -> bool {
    matches!(error, HttpError::Response(response) if response.code == 404)
}

impl From<GcpBucket> for BucketConfiguration {
    fn from(value: GcpBucket) -> Self {
        BucketConfiguration {
            name: value.name,
            location: value.location,
            storage_class: value.storage_class,
            versioning_enabled: value.versioning.map(|v| v.enabled).unwrap_or(false),
            labels: value.labels,
        }
    }
}

impl From<&BucketCreationConfiguration> for BucketCreationConfig {
    fn from(value: &BucketCreationConfiguration) -> Self {
        BucketCreationConfig {
            location: value.location.to_uppercase(),
            storage_class: value.storage_class.as_ref().map(|c| c.to_uppercase()),
            versioning: match value.versioning_enabled {
                false => None,
                true => Some(Versioning { enabled: true }),
            },
            labels: value.labels.clone(),
            ..Default::default()
        }
    }
}
