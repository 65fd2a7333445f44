use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use url::Url;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Cannot create credentials: {raw_error_message:?}.")]
    CannotCreateCredentials { raw_error_message: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum JsonCredentialsType {
    #[serde(rename = "service_account")]
    ServiceAccount,
}

impl Display for JsonCredentialsType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            JsonCredentialsType::ServiceAccount => "service_account",
        })
    }
}

/// Service account key file, as downloaded from the Google console.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JsonCredentials {
    pub r#type: JsonCredentialsType,
    // Service account fields
    pub client_email: String,
    pub client_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub auth_uri: Url,
    pub token_uri: Url,
    pub auth_provider_x509_cert_url: Url,
    pub client_x509_cert_url: Url,
    pub project_id: String,
    pub universe_domain: String,
}

impl JsonCredentials {
    pub fn from_json_str(raw_credentials: &str) -> Result<Self, CredentialsError> {
        serde_json::from_str(raw_credentials).map_err(|e| CredentialsError::CannotCreateCredentials {
            raw_error_message: e.to_string(),
        })
    }

    pub fn to_json_string(&self) -> Result<String, CredentialsError> {
        serde_json::to_string(self).map_err(|e| CredentialsError::CannotCreateCredentials {
            raw_error_message: e.to_string(),
        })
    }
}

// private key never ends up in logs
impl std::fmt::Debug for JsonCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonCredentials")
            .field("type", &self.r#type)
            .field("client_email", &self.client_email)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}
