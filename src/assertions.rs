//! Strict entry points for test code.
//!
//! Every function here fails the calling test (by panicking) as soon as the
//! underlying operation returns an error or a bucket does not match what is
//! expected. Use the components in [`crate::object_storage`] and
//! [`crate::verification`] directly to handle failures instead.

use crate::object_storage::bucket_emptying::{BucketEmptying, EmptiedBucket};
use crate::object_storage::bucket_lifecycle::BucketLifecycle;
use crate::object_storage::object_io::ObjectIo;
use crate::object_storage::{BucketConfiguration, BucketCreationConfiguration, BucketDeleteStrategy};
use crate::services::gcp::object_storage_service::ObjectStorageService;
use crate::verification::Verdict;
use crate::verification::attribute::BucketAttributeVerifier;
use crate::verification::labels::BucketLabelVerifier;
use std::fmt::Display;
use std::io::Read;
use std::sync::Arc;
use tracing::error;

pub struct BucketAssertions {
    lifecycle: BucketLifecycle,
    object_io: ObjectIo,
    emptying: BucketEmptying,
    attribute_verifier: BucketAttributeVerifier,
    label_verifier: BucketLabelVerifier,
}

fn fail_test<T: Display>(failure: T) -> ! {
    error!("{failure}");
    panic!("{failure}");
}

fn or_fail_test<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => fail_test(e),
    }
}

fn assert_success(verdict: Verdict) {
    if let Verdict::Mismatch(mismatch) = verdict {
        fail_test(mismatch);
    }
}

impl BucketAssertions {
    pub fn new(service: Arc<ObjectStorageService>) -> Self {
        Self {
            lifecycle: BucketLifecycle::new(service.clone()),
            object_io: ObjectIo::new(service.clone()),
            emptying: BucketEmptying::new(service.clone()),
            attribute_verifier: BucketAttributeVerifier::new(service.clone()),
            label_verifier: BucketLabelVerifier::new(service),
        }
    }

    pub fn create_bucket(
        &self,
        project_id: &str,
        bucket_name: &str,
        configuration: &BucketCreationConfiguration,
    ) -> BucketConfiguration {
        or_fail_test(self.lifecycle.create_bucket(project_id, bucket_name, configuration))
    }

    pub fn delete_bucket(&self, bucket_name: &str, bucket_delete_strategy: BucketDeleteStrategy) {
        or_fail_test(self.lifecycle.delete_bucket(bucket_name, bucket_delete_strategy))
    }

    pub fn assert_bucket_exists(&self, bucket_name: &str) -> BucketConfiguration {
        or_fail_test(self.lifecycle.check_bucket_exists(bucket_name))
    }

    pub fn read_object(&self, bucket_name: &str, object_key: &str) -> impl Read + use<> {
        or_fail_test(self.object_io.read_object(bucket_name, object_key))
    }

    pub fn write_object<R: Read>(
        &self,
        bucket_name: &str,
        object_key: &str,
        body: R,
        content_type: Option<&str>,
    ) -> String {
        or_fail_test(self.object_io.write_object(bucket_name, object_key, body, content_type))
    }

    pub fn empty_bucket(&self, bucket_name: &str) -> EmptiedBucket {
        or_fail_test(self.emptying.empty_bucket(bucket_name))
    }

    pub fn assert_bucket_attribute(&self, bucket_name: &str, attribute_name: &str, expected_value: &str) {
        assert_success(or_fail_test(self.attribute_verifier.check_bucket_attribute(
            bucket_name,
            attribute_name,
            expected_value,
        )))
    }

    pub fn assert_bucket_label(&self, bucket_name: &str, label_name: &str, expected_value: &str) {
        assert_success(or_fail_test(
            self.label_verifier.check_bucket_label(bucket_name, label_name, expected_value),
        ))
    }
}
