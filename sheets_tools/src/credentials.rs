use std::{env, path::PathBuf};

use alsium_common::Secret;
use log::*;
use serde::Deserialize;

use crate::SheetsApiError;

pub const DEFAULT_SERVICE_ACCOUNT_FILE: &str = "service_account.json";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Where the service account key comes from. Hosted deployments usually inject the whole JSON key into an environment
/// variable; local development tends to use a key file.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Inline(Secret<String>),
    File(PathBuf),
}

impl CredentialSource {
    /// Reads `GOOGLE_SERVICE_ACCOUNT_JSON`, falling back to the file named in `GOOGLE_SERVICE_ACCOUNT_FILE`
    /// (or `service_account.json`).
    pub fn from_env() -> Self {
        let inline = env::var("GOOGLE_SERVICE_ACCOUNT_JSON").ok();
        let file = env::var("GOOGLE_SERVICE_ACCOUNT_FILE").ok();
        Self::resolve(inline, file)
    }

    /// The inline JSON takes precedence whenever it is non-empty.
    pub fn resolve(inline: Option<String>, file: Option<String>) -> Self {
        match inline {
            Some(json) if !json.trim().is_empty() => {
                debug!("🪛️ Using inline service account credentials");
                Self::Inline(Secret::new(json))
            },
            _ => {
                let path = file.filter(|f| !f.trim().is_empty()).unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT_FILE.into());
                debug!("🪛️ Using service account credentials from {path}");
                Self::File(PathBuf::from(path))
            },
        }
    }

    pub fn load(&self) -> Result<ServiceAccountKey, SheetsApiError> {
        match self {
            Self::Inline(json) => ServiceAccountKey::from_json(json.reveal()),
            Self::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    SheetsApiError::Credentials(format!("Could not read {}: {e}", path.display()))
                })?;
                ServiceAccountKey::from_json(&json)
            },
        }
    }
}

/// The subset of a Google service account JSON key that the token exchange needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: Secret<String>,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, SheetsApiError> {
        let key = serde_json::from_str::<Self>(json).map_err(|e| SheetsApiError::Credentials(e.to_string()))?;
        match key.key_type.as_deref() {
            None | Some("service_account") => Ok(key),
            Some(other) => Err(SheetsApiError::Credentials(format!("Expected a service_account key, got {other}"))),
        }
    }
}
