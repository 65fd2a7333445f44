use crate::object_storage::errors::ObjectStorageError;
use crate::object_storage::{DEFAULT_CONTENT_TYPE, public_object_url};
use crate::services::gcp::object_storage_service::ObjectStorageService;
use std::io::{Cursor, Read};
use std::sync::Arc;
use tracing::info;

pub struct ObjectIo {
    service: Arc<ObjectStorageService>,
}

impl ObjectIo {
    pub fn new(service: Arc<ObjectStorageService>) -> Self {
        Self { service }
    }

    pub fn read_object(&self, bucket_name: &str, object_key: &str) -> Result<impl Read + use<>, ObjectStorageError> {
        info!(bucket_name, object_key, "Reading object from bucket {bucket_name} using path {object_key}");

        let object = self.service.get_object(bucket_name, object_key)?;
        Ok(Cursor::new(object.value))
    }

    /// Uploads `body` as a new object, replacing any object with the same key, and returns its public URL.
    /// Content type defaults to `application/octet-stream` when unset or empty, any other value is sent as is.
    pub fn write_object<R: Read>(
        &self,
        bucket_name: &str,
        object_key: &str,
        mut body: R,
        content_type: Option<&str>,
    ) -> Result<String, ObjectStorageError> {
        let content_type = match content_type {
            Some(content_type) if !content_type.is_empty() => content_type,
            _ => DEFAULT_CONTENT_TYPE,
        };

        info!(
            bucket_name,
            object_key,
            content_type,
            "Writing object to bucket {bucket_name} using path {object_key} and content type {content_type}"
        );

        let mut content: Vec<u8> = vec![];
        body.read_to_end(&mut content)
            .map_err(|e| ObjectStorageError::CannotWriteObject {
                bucket_name: bucket_name.to_string(),
                object_key: object_key.to_string(),
                raw_error_message: e.to_string(),
            })?;

        self.service.put_object(bucket_name, object_key, content, content_type)?;

        Ok(public_object_url(bucket_name, object_key))
    }
}
