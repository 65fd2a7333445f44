use crate::helpers::gcp::{GCP_LOCATION, delete_test_bucket, object_storage_service, test_bucket_name};
use crate::helpers::utilities::{init, teardown};
use function_name::named;
use gcs_test_harness::assertions::BucketAssertions;
use gcs_test_harness::object_storage::bucket_lifecycle::BucketLifecycle;
use gcs_test_harness::object_storage::{BucketCreationConfiguration, BucketDeleteStrategy};
use std::io::Read;

#[cfg(feature = "test-gcp-minimal")]
#[named]
#[test]
fn test_bucket_attributes_and_labels() {
    // setup:
    let start = init();
    let (service, project_id) = object_storage_service();
    let assertions = BucketAssertions::new(service.clone());

    let bucket = assertions.create_bucket(
        project_id.as_str(),
        test_bucket_name().as_str(),
        &BucketCreationConfiguration {
            location: GCP_LOCATION.to_string(),
            storage_class: Some("standard".to_string()),
            versioning_enabled: true,
            labels: Some(hashmap! {
                "owner".to_string() => "harness".to_string(),
                "test_name".to_string() => function_name!().replace('_', "-"),
            }),
        },
    );
    let _bucket_guard = scopeguard::guard(&bucket.name, |bucket_name| {
        delete_test_bucket(&service, bucket_name.as_str());
    });

    // execute & verify:
    assertions.assert_bucket_exists(bucket.name.as_str());
    assertions.assert_bucket_attribute(bucket.name.as_str(), "location", "europe");
    assertions.assert_bucket_attribute(bucket.name.as_str(), "StorageClass", "standard");
    assertions.assert_bucket_attribute(bucket.name.as_str(), "version", "true");
    assertions.assert_bucket_attribute(bucket.name.as_str(), "whatever", "ignored");
    assertions.assert_bucket_label(bucket.name.as_str(), "owner", "harness");

    teardown(start, function_name!());
}

#[cfg(feature = "test-gcp-minimal")]
#[named]
#[test]
fn test_write_read_empty_and_delete_bucket() {
    // setup:
    let start = init();
    let (service, project_id) = object_storage_service();
    let assertions = BucketAssertions::new(service.clone());

    let bucket = assertions.create_bucket(
        project_id.as_str(),
        test_bucket_name().as_str(),
        &BucketCreationConfiguration {
            location: GCP_LOCATION.to_string(),
            ..Default::default()
        },
    );
    // stick a guard on the bucket in case the test fails before deleting it
    let _bucket_guard = scopeguard::guard(&bucket.name, |bucket_name| {
        delete_test_bucket(&service, bucket_name.as_str());
    });
    let content = br#"{"status": "ok"}"#.to_vec();

    // execute:
    let url = assertions.write_object(bucket.name.as_str(), "reports/status.json", content.as_slice(), None);
    assertions.write_object(bucket.name.as_str(), "empty.txt", std::io::empty(), Some("text/plain"));
    let mut read_content = vec![];
    assertions
        .read_object(bucket.name.as_str(), "reports/status.json")
        .read_to_end(&mut read_content)
        .expect("Cannot consume object");
    let emptied_bucket = assertions.empty_bucket(bucket.name.as_str());
    assertions.delete_bucket(bucket.name.as_str(), BucketDeleteStrategy::HardDelete);

    // verify:
    assert_eq!(
        format!("https://storage.googleapis.com/{}/reports/status.json", bucket.name),
        url
    );
    assert_eq!(content, read_content);
    assert_eq!(2, emptied_bucket.deleted_objects.len());
    assert!(emptied_bucket.already_absent_objects.is_empty());
    assert_eq!(Ok(false), BucketLifecycle::new(service.clone()).bucket_exists(&bucket.name));

    teardown(start, function_name!());
}
