pub mod admission_control;
pub mod config;
pub mod google_cloud_sdk_types;
pub mod object_storage_service;
