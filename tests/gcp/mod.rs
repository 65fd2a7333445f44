mod gcp_bucket_assertions;
mod gcp_object_storage_service;
