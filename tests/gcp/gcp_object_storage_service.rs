use crate::helpers::gcp::{GCP_LOCATION, delete_test_bucket, object_storage_service, test_bucket_name};
use crate::helpers::utilities::{init, teardown};
use function_name::named;
use gcs_test_harness::object_storage::BucketCreationConfiguration;
use gcs_test_harness::services::gcp::object_storage_service::ObjectStorageServiceError;
use std::collections::HashMap;

/// Note those tests might be a bit long because of the write limitations on bucket / objects

#[cfg(feature = "test-gcp-minimal")]
#[named]
#[test]
fn test_bucket_exists() {
    // setup:
    let start = init();
    let (service, project_id) = object_storage_service();

    let existing_bucket_name = service
        .create_bucket(
            project_id.as_str(),
            test_bucket_name().as_str(),
            &BucketCreationConfiguration {
                location: GCP_LOCATION.to_string(),
                labels: Some(HashMap::from([("test_name".to_string(), function_name!().to_string())])),
                ..Default::default()
            },
        )
        .expect("Cannot create bucket")
        .name;
    // stick a guard on the bucket to delete bucket after test
    let _existing_bucket_name_guard = scopeguard::guard(&existing_bucket_name, |bucket_name| {
        delete_test_bucket(&service, bucket_name.as_str());
    });
    let not_existing_bucket_name = format!("{}-not-existing", existing_bucket_name);

    // execute & verify:
    assert_eq!(Ok(true), service.bucket_exists(existing_bucket_name.as_str()));
    assert_eq!(Ok(false), service.bucket_exists(not_existing_bucket_name.as_str()));
    assert_eq!(
        Err(ObjectStorageServiceError::BucketNotFound {
            bucket_name: not_existing_bucket_name.to_string(),
        }),
        service.get_bucket(not_existing_bucket_name.as_str())
    );

    teardown(start, function_name!());
}

#[cfg(feature = "test-gcp-minimal")]
#[named]
#[test]
fn test_create_bucket_success() {
    // setup:
    let start = init();
    let (service, project_id) = object_storage_service();

    struct TestCase<'a> {
        input: BucketCreationConfiguration,
        description: &'a str,
    }

    let test_cases = vec![
        TestCase {
            input: BucketCreationConfiguration {
                location: GCP_LOCATION.to_string(),
                storage_class: None,
                versioning_enabled: false,
                labels: Some(HashMap::from([
                    ("bucket_name".to_string(), "bucket_1".to_string()),
                    ("test_name".to_string(), function_name!().to_string()),
                ])),
            },
            description: "case 1 - create a simple bucket",
        },
        TestCase {
            input: BucketCreationConfiguration {
                location: GCP_LOCATION.to_string(),
                storage_class: Some("nearline".to_string()),
                versioning_enabled: true,
                labels: Some(HashMap::from([
                    ("bucket_name".to_string(), "bucket_2".to_string()),
                    ("test_name".to_string(), function_name!().to_string()),
                ])),
            },
            description: "case 2 - create a nearline bucket with versioning",
        },
    ];

    for tc in test_cases {
        let bucket_name = test_bucket_name();

        // execute:
        let created_bucket = service
            .create_bucket(project_id.as_str(), bucket_name.as_str(), &tc.input)
            .unwrap_or_else(|_| panic!("Cannot create bucket for test `{}`", tc.description));
        // stick a guard on the bucket to delete bucket after test
        let _created_bucket_guard = scopeguard::guard(&created_bucket.name, |bucket_name| {
            delete_test_bucket(&service, bucket_name.as_str());
        });

        // verify:
        assert_eq!(bucket_name, created_bucket.name, "{}", tc.description);
        assert_eq!(GCP_LOCATION, created_bucket.location, "{}", tc.description);
        assert_eq!(
            tc.input.storage_class.unwrap_or("STANDARD".to_string()).to_uppercase(),
            created_bucket.storage_class,
            "{}",
            tc.description
        );
        assert_eq!(tc.input.versioning_enabled, created_bucket.versioning_enabled, "{}", tc.description);
        assert_eq!(tc.input.labels, created_bucket.labels, "{}", tc.description);
    }

    teardown(start, function_name!());
}

#[cfg(feature = "test-gcp-minimal")]
#[named]
#[test]
fn test_put_get_and_list_objects() {
    // setup:
    let start = init();
    let (service, project_id) = object_storage_service();

    let bucket = service
        .create_bucket(
            project_id.as_str(),
            test_bucket_name().as_str(),
            &BucketCreationConfiguration {
                location: GCP_LOCATION.to_string(),
                labels: Some(HashMap::from([("test_name".to_string(), function_name!().to_string())])),
                ..Default::default()
            },
        )
        .expect("Cannot create bucket");
    let _bucket_guard = scopeguard::guard(&bucket.name, |bucket_name| {
        delete_test_bucket(&service, bucket_name.as_str());
    });

    let object_keys = vec!["a.txt".to_string(), "dir/b.json".to_string()];

    // execute:
    for object_key in &object_keys {
        service
            .put_object(
                bucket.name.as_str(),
                object_key.as_str(),
                format!("content of {object_key}").into_bytes(),
                "text/plain",
            )
            .expect("Cannot put object");
    }
    let mut listed_keys = service
        .list_objects_keys_only(bucket.name.as_str(), None)
        .expect("Cannot list objects");
    listed_keys.sort();
    let fetched_object = service
        .get_object(bucket.name.as_str(), "dir/b.json")
        .expect("Cannot get object");
    let missing_object = service.get_object(bucket.name.as_str(), "missing.txt");

    // verify:
    assert_eq!(object_keys, listed_keys);
    assert_eq!(b"content of dir/b.json".to_vec(), fetched_object.value);
    assert_eq!("text/plain", fetched_object.content_type);
    assert_eq!(
        Err(ObjectStorageServiceError::ObjectNotFound {
            bucket_name: bucket.name.to_string(),
            object_key: "missing.txt".to_string(),
        }),
        missing_object
    );

    teardown(start, function_name!());
}
