use std::sync::Arc;

use alsium_common::Secret;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::*;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{data_objects::TokenResponse, ServiceAccountKey, SheetsApiError};

/// OAuth scopes requested for the service account. Drive access is needed to look spreadsheets up by title.
pub const SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::hours(1);
const REFRESH_MARGIN: Duration = Duration::seconds(60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    pub fn new(key: &ServiceAccountKey, now: DateTime<Utc>) -> Self {
        Self {
            iss: key.client_email.clone(),
            scope: SCOPES.to_string(),
            aud: key.token_uri.clone(),
            iat: now.timestamp(),
            exp: (now + ASSERTION_LIFETIME).timestamp(),
        }
    }
}

/// Signs the RS256 assertion that is exchanged for an access token.
pub fn sign_assertion(key: &ServiceAccountKey, now: DateTime<Utc>) -> Result<String, SheetsApiError> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.reveal().as_bytes())
        .map_err(|e| SheetsApiError::Credentials(format!("Private key is not a valid RSA PEM key. {e}")))?;
    let claims = AssertionClaims::new(key, now);
    jsonwebtoken::encode(&header, &claims, &encoding_key).map_err(|e| SheetsApiError::Credentials(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    token: Secret<String>,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: String, expires_in_secs: i64, now: DateTime<Utc>) -> Self {
        Self { token: Secret::new(token), expires_at: now + Duration::seconds(expires_in_secs) }
    }

    pub fn token(&self) -> &str {
        self.token.reveal().as_str()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token is refreshed a minute before it actually expires, so in-flight requests never carry a stale token.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + REFRESH_MARGIN < self.expires_at
    }
}

pub(crate) struct TokenProvider {
    key: ServiceAccountKey,
    client: Arc<Client>,
    cache: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey, client: Arc<Client>) -> Self {
        Self { key, client, cache: Mutex::new(None) }
    }

    pub fn client_email(&self) -> &str {
        self.key.client_email.as_str()
    }

    pub async fn access_token(&self) -> Result<String, SheetsApiError> {
        let mut cache = self.cache.lock().await;
        let now = Utc::now();
        if let Some(token) = cache.as_ref().filter(|t| t.is_fresh(now)) {
            trace!("📒️ Using cached access token");
            return Ok(token.token().to_string());
        }
        let token = self.exchange(now).await?;
        let value = token.token().to_string();
        *cache = Some(token);
        Ok(value)
    }

    async fn exchange(&self, now: DateTime<Utc>) -> Result<AccessToken, SheetsApiError> {
        debug!("📒️ Requesting a new access token for {}", self.key.client_email);
        let assertion = sign_assertion(&self.key, now)?;
        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| SheetsApiError::TokenExchange(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("📒️ Token exchange failed. {status}. {body}");
            return Err(SheetsApiError::TokenExchange(format!("{status}. {body}")));
        }
        let token = response.json::<TokenResponse>().await.map_err(|e| SheetsApiError::JsonError(e.to_string()))?;
        let token = AccessToken::new(token.access_token, token.expires_in, now);
        debug!("📒️ Access token acquired. Expires at {}", token.expires_at());
        Ok(token)
    }

    #[cfg(test)]
    pub(crate) async fn prime(&self, token: AccessToken) {
        *self.cache.lock().await = Some(token);
    }
}
