use std::collections::HashMap;
use strum_macros::EnumIter;

pub mod bucket_emptying;
pub mod bucket_lifecycle;
pub mod errors;
pub mod object_io;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const PUBLIC_URL_BASE: &str = "https://storage.googleapis.com";

#[derive(Clone, Debug, EnumIter, PartialEq)]
pub enum BucketDeleteStrategy {
    /// Delete the bucket as is, the provider refuses to delete a non empty bucket.
    HardDelete,
    /// Delete every object first, then the bucket.
    Empty,
}

/// Live attributes of a bucket at fetch time.
/// Never written back, a new snapshot is fetched for every check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketConfiguration {
    pub name: String,
    pub location: String,
    pub storage_class: String,
    pub versioning_enabled: bool,
    pub labels: Option<HashMap<String, String>>,
}

impl BucketConfiguration {
    pub fn new(
        name: String,
        location: String,
        storage_class: String,
        versioning_enabled: bool,
        labels: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            name,
            location,
            storage_class,
            versioning_enabled,
            labels,
        }
    }
}

/// Attributes requested when creating a bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketCreationConfiguration {
    pub location: String,
    /// Provider default (STANDARD) when not set.
    pub storage_class: Option<String>,
    pub versioning_enabled: bool,
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BucketObject {
    pub bucket_name: String,
    pub key: String,
    pub value: Vec<u8>,
    pub content_type: String,
}

impl BucketObject {
    pub fn public_url(&self) -> String {
        public_object_url(self.bucket_name.as_str(), self.key.as_str())
    }
}

/// Public URL of an object, the path is not escaped.
pub fn public_object_url(bucket_name: &str, object_key: &str) -> String {
    format!("{PUBLIC_URL_BASE}/{bucket_name}/{object_key}")
}
