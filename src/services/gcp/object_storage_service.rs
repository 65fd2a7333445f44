use crate::object_storage::{BucketConfiguration, BucketCreationConfiguration, BucketObject};
use crate::runtime::block_on;
use crate::services::gcp::admission_control::{AdmissionControl, StorageResourceKind};
use crate::services::gcp::config::ObjectStorageServiceConfig;
use crate::services::gcp::google_cloud_sdk_types::{is_not_found_error, new_gcp_credentials_file_from_credentials};
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::buckets::delete::DeleteBucketRequest;
use google_cloud_storage::http::buckets::get::GetBucketRequest;
use google_cloud_storage::http::buckets::insert::{InsertBucketParam, InsertBucketRequest};
use google_cloud_storage::http::objects::Object as GcpObject;
use google_cloud_storage::http::objects::delete::DeleteObjectRequest;
use google_cloud_storage::http::objects::download::Range;
use google_cloud_storage::http::objects::get::GetObjectRequest;
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use google_cloud_storage::http::objects::upload::{UploadObjectRequest, UploadType};
use reqwest::Body;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ObjectStorageServiceError {
    #[error("Cannot create object storage service: {raw_error_message:?}")]
    CannotCreateService { raw_error_message: String },
    #[error("Cannot create bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotCreateBucket {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot get bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotGetBucket {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Bucket `{bucket_name}` doesn't exist")]
    BucketNotFound { bucket_name: String },
    #[error("Cannot delete bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotDeleteBucket {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot delete object `{object_key}` from bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotDeleteObject {
        bucket_name: String,
        object_key: String,
        raw_error_message: String,
    },
    #[error("Cannot list objects from bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotListObjects {
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot put object `{object_key}` to bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotPutObjectToBucket {
        object_key: String,
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Cannot get object `{object_key}` from bucket `{bucket_name}`: {raw_error_message:?}")]
    CannotGetObject {
        object_key: String,
        bucket_name: String,
        raw_error_message: String,
    },
    #[error("Object `{object_key}` doesn't exist in bucket `{bucket_name}`")]
    ObjectNotFound { bucket_name: String, object_key: String },
    #[error("Cannot proceed, admission control blocked after several tries")]
    AdmissionControlCannotProceedAfterSeveralTries,
}

/// Gateway to Google Cloud Storage.
/// A new client is opened for every call, nothing is pooled nor cached.
#[cfg_attr(test, faux::create)]
pub struct ObjectStorageService {
    config: ObjectStorageServiceConfig,
    admission_control: AdmissionControl,
}

#[cfg_attr(test, faux::methods)]
impl ObjectStorageService {
    pub fn new(
        config: ObjectStorageServiceConfig,
        admission_control: AdmissionControl,
    ) -> Result<Self, ObjectStorageServiceError> {
        // fail early on unusable credentials rather than on first call
        if let Some(credentials) = &config.credentials {
            new_gcp_credentials_file_from_credentials(credentials).map_err(|e| {
                ObjectStorageServiceError::CannotCreateService {
                    raw_error_message: e.to_string(),
                }
            })?;
        }

        Ok(Self {
            config,
            admission_control,
        })
    }

    fn client(&self) -> Result<Client, ObjectStorageServiceError> {
        let client_config = match (&self.config.storage_endpoint, &self.config.credentials) {
            (Some(storage_endpoint), _) => {
                let mut client_config = ClientConfig::default().anonymous();
                client_config.storage_endpoint = storage_endpoint.as_str().trim_end_matches('/').to_string();
                client_config
            }
            (None, Some(credentials)) => block_on(ClientConfig::default().with_credentials(
                new_gcp_credentials_file_from_credentials(credentials).map_err(|e| {
                    ObjectStorageServiceError::CannotCreateService {
                        raw_error_message: e.to_string(),
                    }
                })?,
            ))
            .map_err(|e| ObjectStorageServiceError::CannotCreateService {
                raw_error_message: e.to_string(),
            })?,
            (None, None) => block_on(ClientConfig::default().with_auth()).map_err(|e| {
                ObjectStorageServiceError::CannotCreateService {
                    raw_error_message: e.to_string(),
                }
            })?,
        };

        Ok(Client::new(client_config))
    }

    fn wait_for_a_slot_in_admission_control(
        &self,
        resource_kind: StorageResourceKind,
    ) -> Result<(), ObjectStorageServiceError> {
        self.admission_control
            .wait_for_a_slot(resource_kind)
            .map_err(|_| ObjectStorageServiceError::AdmissionControlCannotProceedAfterSeveralTries)
    }

    pub fn bucket_exists(&self, bucket_name: &str) -> Result<bool, ObjectStorageServiceError> {
        match self.get_bucket(bucket_name) {
            Ok(_) => Ok(true),
            Err(ObjectStorageServiceError::BucketNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn get_bucket(&self, bucket_name: &str) -> Result<BucketConfiguration, ObjectStorageServiceError> {
        let client = self.client()?;
        debug!(bucket_name, "fetching bucket attributes");

        let gcp_bucket = block_on(client.get_bucket(&GetBucketRequest {
            bucket: bucket_name.to_string(),
            if_metageneration_match: None,
            if_metageneration_not_match: None,
            projection: None,
        }))
        .map_err(|e| match is_not_found_error(&e) {
            true => ObjectStorageServiceError::BucketNotFound {
                bucket_name: bucket_name.to_string(),
            },
            false => ObjectStorageServiceError::CannotGetBucket {
                bucket_name: bucket_name.to_string(),
                raw_error_message: e.to_string(),
            },
        })?;

        Ok(BucketConfiguration::from(gcp_bucket))
    }

    pub fn create_bucket(
        &self,
        project_id: &str,
        bucket_name: &str,
        configuration: &BucketCreationConfiguration,
    ) -> Result<BucketConfiguration, ObjectStorageServiceError> {
        let client = self.client()?;

        let create_bucket_request = InsertBucketRequest {
            name: bucket_name.to_string(),
            param: InsertBucketParam {
                project: project_id.to_string(),
                ..Default::default()
            },
            bucket: configuration.into(),
        };

        self.wait_for_a_slot_in_admission_control(StorageResourceKind::Bucket)?;

        match block_on(client.insert_bucket(&create_bucket_request)) {
            Ok(created_bucket) => Ok(BucketConfiguration::from(created_bucket)),
            Err(e) => Err(ObjectStorageServiceError::CannotCreateBucket {
                bucket_name: bucket_name.to_string(),
                raw_error_message: e.to_string(),
            }),
        }
    }

    pub fn delete_bucket(&self, bucket_name: &str) -> Result<(), ObjectStorageServiceError> {
        let client = self.client()?;

        self.wait_for_a_slot_in_admission_control(StorageResourceKind::Bucket)?;
        block_on(client.delete_bucket(&DeleteBucketRequest {
            bucket: bucket_name.to_string(),
            param: Default::default(),
        }))
        .map_err(|e| match is_not_found_error(&e) {
            true => ObjectStorageServiceError::BucketNotFound {
                bucket_name: bucket_name.to_string(),
            },
            false => ObjectStorageServiceError::CannotDeleteBucket {
                bucket_name: bucket_name.to_string(),
                raw_error_message: e.to_string(),
            },
        })
    }

    /// Lists every object key, following page tokens until the listing is exhausted.
    pub fn list_objects_keys_only(
        &self,
        bucket_name: &str,
        object_key_prefix: Option<&str>,
    ) -> Result<Vec<String>, ObjectStorageServiceError> {
        let client = self.client()?;
        let mut objects: Vec<String> = vec![];
        let mut next_page_token: Option<String> = None;

        loop {
            match block_on(client.list_objects(&ListObjectsRequest {
                page_token: next_page_token,
                bucket: bucket_name.to_string(),
                prefix: object_key_prefix.map(str::to_string),
                max_results: Some(1000),
                ..Default::default()
            })) {
                Ok(objects_list_response) => {
                    next_page_token = objects_list_response.next_page_token;
                    if let Some(new_objects) = objects_list_response.items {
                        objects.extend(new_objects.into_iter().map(|o| o.name));
                    }

                    if next_page_token.is_none() {
                        break;
                    }
                }
                Err(e) => {
                    return Err(match is_not_found_error(&e) {
                        true => ObjectStorageServiceError::BucketNotFound {
                            bucket_name: bucket_name.to_string(),
                        },
                        false => ObjectStorageServiceError::CannotListObjects {
                            bucket_name: bucket_name.to_string(),
                            raw_error_message: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(objects)
    }

    pub fn get_object(&self, bucket_name: &str, object_key: &str) -> Result<BucketObject, ObjectStorageServiceError> {
        let client = self.client()?;
        let object_request = GetObjectRequest {
            bucket: bucket_name.to_string(),
            object: object_key.to_string(),
            ..Default::default()
        };
        let to_service_error = |e: google_cloud_storage::http::Error| match is_not_found_error(&e) {
            true => ObjectStorageServiceError::ObjectNotFound {
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
            },
            false => ObjectStorageServiceError::CannotGetObject {
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
                raw_error_message: e.to_string(),
            },
        };

        let object = block_on(client.get_object(&object_request)).map_err(to_service_error)?;
        let object_content =
            block_on(client.download_object(&object_request, &Range(None, None))).map_err(to_service_error)?;

        Ok(BucketObject {
            bucket_name: object.bucket,
            key: object.name,
            value: object_content,
            content_type: object.content_type.unwrap_or_default(),
        })
    }

    pub fn put_object(
        &self,
        bucket_name: &str,
        object_key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<BucketObject, ObjectStorageServiceError> {
        let client = self.client()?;

        self.wait_for_a_slot_in_admission_control(StorageResourceKind::Object)?;
        match block_on(client.upload_object(
            &UploadObjectRequest {
                bucket: bucket_name.to_string(),
                ..Default::default()
            },
            Body::from(content.clone()),
            &UploadType::Multipart(Box::new(GcpObject {
                name: object_key.to_string(),
                content_type: Some(content_type.to_string()),
                ..Default::default()
            })),
        )) {
            Ok(o) => Ok(BucketObject {
                bucket_name: o.bucket,
                key: o.name,
                value: content,
                content_type: o.content_type.unwrap_or_else(|| content_type.to_string()),
            }),
            Err(e) => Err(ObjectStorageServiceError::CannotPutObjectToBucket {
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
                raw_error_message: e.to_string(),
            }),
        }
    }

    pub fn delete_object(&self, bucket_name: &str, object_key: &str) -> Result<(), ObjectStorageServiceError> {
        let client = self.client()?;

        self.wait_for_a_slot_in_admission_control(StorageResourceKind::Object)?;
        block_on(client.delete_object(&DeleteObjectRequest {
            bucket: bucket_name.to_string(),
            object: object_key.to_string(),
            ..Default::default()
        }))
        .map_err(|e| match is_not_found_error(&e) {
            true => ObjectStorageServiceError::ObjectNotFound {
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
            },
            false => ObjectStorageServiceError::CannotDeleteObject {
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
                raw_error_message: e.to_string(),
            },
        })
    }
}
