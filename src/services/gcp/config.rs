use crate::models::gcp::{CredentialsError, JsonCredentials};
use std::env;
use thiserror::Error;
use url::Url;

pub const GCP_CREDENTIALS_ENV_VAR: &str = "GCP_CREDENTIALS";
pub const GCP_PROJECT_NAME_ENV_VAR: &str = "GCP_PROJECT_NAME";
pub const STORAGE_EMULATOR_HOST_ENV_VAR: &str = "STORAGE_EMULATOR_HOST";

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid `{env_var}` value: {raw_error_message:?}")]
    InvalidValue { env_var: String, raw_error_message: String },
    #[error(transparent)]
    InvalidCredentials(#[from] CredentialsError),
}

/// How the storage service authenticates and where it sends requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectStorageServiceConfig {
    /// Service account credentials, application default credentials are used when not set.
    pub credentials: Option<JsonCredentials>,
    /// Endpoint override (e.g. a local fake-gcs-server), requests are sent anonymously when set.
    pub storage_endpoint: Option<Url>,
    pub project_id: Option<String>,
}

impl ObjectStorageServiceConfig {
    pub fn new(credentials: Option<JsonCredentials>, storage_endpoint: Option<Url>, project_id: Option<String>) -> Self {
        Self {
            credentials,
            storage_endpoint,
            project_id,
        }
    }

    /// Loads `.env` if present then reads `GCP_CREDENTIALS`, `STORAGE_EMULATOR_HOST` and `GCP_PROJECT_NAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let credentials = match non_empty(GCP_CREDENTIALS_ENV_VAR) {
            Some(raw_credentials) => Some(JsonCredentials::from_json_str(raw_credentials.as_str())?),
            None => None,
        };

        let storage_endpoint = match non_empty(STORAGE_EMULATOR_HOST_ENV_VAR) {
            Some(raw_endpoint) => {
                // emulators are usually given as `host:port`
                let raw_endpoint = match raw_endpoint.contains("://") {
                    true => raw_endpoint,
                    false => format!("http://{raw_endpoint}"),
                };
                Some(Url::parse(raw_endpoint.as_str()).map_err(|e| ConfigError::InvalidValue {
                    env_var: STORAGE_EMULATOR_HOST_ENV_VAR.to_string(),
                    raw_error_message: e.to_string(),
                })?)
            }
            None => None,
        };

        let project_id = non_empty(GCP_PROJECT_NAME_ENV_VAR).or_else(|| credentials.as_ref().map(|c| c.project_id.to_string()));

        Ok(Self {
            credentials,
            storage_endpoint,
            project_id,
        })
    }
}
