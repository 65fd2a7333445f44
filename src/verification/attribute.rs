use crate::object_storage::BucketConfiguration;
use crate::object_storage::errors::ObjectStorageError;
use crate::services::gcp::object_storage_service::ObjectStorageService;
use crate::verification::{Mismatch, Verdict};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Bucket attributes a test can check, names are case insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BucketAttribute {
    Location,
    StorageClass,
    Version,
    Labels,
    /// Any other name, always matches.
    Unrecognized(String),
}

impl FromStr for BucketAttribute {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "location" => BucketAttribute::Location,
            "storageclass" => BucketAttribute::StorageClass,
            "version" => BucketAttribute::Version,
            "labels" => BucketAttribute::Labels,
            _ => BucketAttribute::Unrecognized(s.to_string()),
        })
    }
}

impl Display for BucketAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BucketAttribute::Location => "location",
            BucketAttribute::StorageClass => "storageclass",
            BucketAttribute::Version => "version",
            BucketAttribute::Labels => "labels",
            BucketAttribute::Unrecognized(name) => name.as_str(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketAttributeExpectation {
    pub attribute: BucketAttribute,
    pub expected_value: String,
}

impl BucketAttributeExpectation {
    pub fn new(attribute_name: &str, expected_value: &str) -> Self {
        let attribute = match BucketAttribute::from_str(attribute_name) {
            Ok(attribute) => attribute,
            Err(never) => match never {},
        };

        Self {
            attribute,
            expected_value: expected_value.to_string(),
        }
    }

    /// Rules:
    /// - location: actual location starts with the expected value, ignoring case
    /// - storageclass: same class, ignoring case
    /// - version: expected `true` (any case) means versioning enabled, anything else disabled
    /// - labels: only logged, see [`BucketLabelVerifier`](crate::verification::labels::BucketLabelVerifier)
    pub fn evaluate(&self, bucket: &BucketConfiguration) -> Verdict {
        let bucket_name = bucket.name.as_str();
        let expected = self.expected_value.as_str();

        match &self.attribute {
            BucketAttribute::Location => {
                info!(bucket_name, expected, actual = bucket.location.as_str(), "Checking bucket location");
                match bucket.location.to_lowercase().starts_with(&expected.to_lowercase()) {
                    true => Verdict::Success,
                    false => Verdict::Mismatch(Mismatch::Location {
                        expected_prefix: expected.to_string(),
                        actual: bucket.location.to_string(),
                    }),
                }
            }
            BucketAttribute::StorageClass => {
                info!(bucket_name, expected, actual = bucket.storage_class.as_str(), "Checking bucket storage class");
                match bucket.storage_class.to_uppercase() == expected.to_uppercase() {
                    true => Verdict::Success,
                    false => Verdict::Mismatch(Mismatch::StorageClass {
                        expected: expected.to_string(),
                        actual: bucket.storage_class.to_uppercase(),
                    }),
                }
            }
            BucketAttribute::Version => {
                let versioning_expected = expected.to_lowercase() == "true";
                info!(
                    bucket_name,
                    versioning_expected,
                    versioning_enabled = bucket.versioning_enabled,
                    "Checking bucket versioning, versioning enabled? {}",
                    bucket.versioning_enabled
                );
                match (versioning_expected, bucket.versioning_enabled) {
                    (true, false) => Verdict::Mismatch(Mismatch::VersioningShouldBeEnabled),
                    (false, true) => Verdict::Mismatch(Mismatch::VersioningShouldBeDisabled),
                    _ => Verdict::Success,
                }
            }
            BucketAttribute::Labels => {
                info!(bucket_name, "Labels {:?}", bucket.labels);
                Verdict::Success
            }
            BucketAttribute::Unrecognized(attribute_name) => {
                warn!(bucket_name, attribute_name = attribute_name.as_str(), "Unknown bucket attribute, nothing checked");
                Verdict::Success
            }
        }
    }
}

pub struct BucketAttributeVerifier {
    service: Arc<ObjectStorageService>,
}

impl BucketAttributeVerifier {
    pub fn new(service: Arc<ObjectStorageService>) -> Self {
        Self { service }
    }

    /// Fetches the bucket once and checks a single attribute.
    /// Failing to fetch the bucket is an error, never a mismatch.
    pub fn check_bucket_attribute(
        &self,
        bucket_name: &str,
        attribute_name: &str,
        expected_value: &str,
    ) -> Result<Verdict, ObjectStorageError> {
        info!(
            bucket_name,
            attribute_name,
            expected_value,
            "Reading attribute {attribute_name} for bucket {bucket_name} with value {expected_value}"
        );

        let bucket = self.service.get_bucket(bucket_name)?;

        Ok(BucketAttributeExpectation::new(attribute_name, expected_value).evaluate(&bucket))
    }
}
