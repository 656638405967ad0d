use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::RazorpayConfig,
    data_objects::{NewRazorpayOrder, RazorpayErrorEnvelope, RazorpayOrder},
    RazorpayApiError,
};

#[derive(Clone)]
pub struct RazorpayApi {
    config: RazorpayConfig,
    client: Arc<Client>,
}

impl RazorpayApi {
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RazorpayApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, RazorpayApiError> {
        let url = self.url(path);
        trace!("💳️ Sending REST query: {method} {url}");
        let mut req = self
            .client
            .request(method, url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.reveal()));
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            trace!("💳️ REST query successful. {status}");
            response.json::<T>().await.map_err(|e| RazorpayApiError::JsonError(e.to_string()))
        } else {
            let body = response.text().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
            Err(decode_error(status.as_u16(), &body))
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url.trim_end_matches('/'))
    }

    /// Creates a new order. The returned order id is what the checkout widget needs to start a payment.
    pub async fn create_order(&self, order: &NewRazorpayOrder) -> Result<RazorpayOrder, RazorpayApiError> {
        debug!("💳️ Creating order for {} {} (receipt {})", order.amount, order.currency, order.receipt);
        let result = self.rest_query::<RazorpayOrder, _>(Method::POST, "/orders", Some(order)).await?;
        info!("💳️ Created order {} for receipt {}", result.id, order.receipt);
        Ok(result)
    }
}

/// Turns a non-2xx response body into a [`RazorpayApiError::QueryError`]. Bodies that are not in Razorpay's error
/// format are passed through verbatim.
pub fn decode_error(status: u16, body: &str) -> RazorpayApiError {
    match serde_json::from_str::<RazorpayErrorEnvelope>(body) {
        Ok(envelope) => {
            let detail = envelope.error;
            warn!("💳️ Razorpay rejected the request. {status} {}: {}", detail.code, detail.description);
            RazorpayApiError::QueryError { status, code: detail.code, message: detail.description }
        },
        Err(_) => {
            warn!("💳️ Razorpay returned {status} with an unrecognised body: {body}");
            RazorpayApiError::QueryError { status, code: "UNKNOWN".into(), message: body.to_string() }
        },
    }
}
