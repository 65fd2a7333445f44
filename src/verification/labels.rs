use crate::object_storage::BucketConfiguration;
use crate::object_storage::errors::ObjectStorageError;
use crate::services::gcp::object_storage_service::ObjectStorageService;
use crate::verification::{Mismatch, Verdict};
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketLabelExpectation {
    pub label_name: String,
    pub expected_value: String,
}

impl BucketLabelExpectation {
    pub fn new(label_name: &str, expected_value: &str) -> Self {
        Self {
            label_name: label_name.to_string(),
            expected_value: expected_value.to_string(),
        }
    }

    /// Label values are compared as is, case sensitive.
    /// A bucket without any label is an error rather than a mismatch.
    pub fn evaluate(&self, bucket: &BucketConfiguration) -> Result<Verdict, ObjectStorageError> {
        let labels = match &bucket.labels {
            Some(labels) if !labels.is_empty() => labels,
            _ => {
                return Err(ObjectStorageError::BucketHasNoLabels {
                    bucket_name: bucket.name.to_string(),
                });
            }
        };
        info!(bucket_name = bucket.name.as_str(), "Labels {:?}", labels);

        match labels.get(&self.label_name) {
            Some(actual) if actual == &self.expected_value => {
                info!("Matching label found {} = {}", self.label_name, actual);
                Ok(Verdict::Success)
            }
            Some(actual) => Ok(Verdict::Mismatch(Mismatch::LabelValue {
                label_name: self.label_name.to_string(),
                expected: self.expected_value.to_string(),
                actual: actual.to_string(),
            })),
            None => Ok(Verdict::Mismatch(Mismatch::LabelNotFound {
                label_name: self.label_name.to_string(),
                expected: self.expected_value.to_string(),
            })),
        }
    }
}

pub struct BucketLabelVerifier {
    service: Arc<ObjectStorageService>,
}

impl BucketLabelVerifier {
    pub fn new(service: Arc<ObjectStorageService>) -> Self {
        Self { service }
    }

    pub fn check_bucket_label(
        &self,
        bucket_name: &str,
        label_name: &str,
        expected_value: &str,
    ) -> Result<Verdict, ObjectStorageError> {
        info!(
            bucket_name,
            label_name,
            expected_value,
            "Reading label {label_name} for bucket {bucket_name} with value {expected_value}"
        );

        let bucket = self.service.get_bucket(bucket_name)?;

        BucketLabelExpectation::new(label_name, expected_value).evaluate(&bucket)
    }
}
