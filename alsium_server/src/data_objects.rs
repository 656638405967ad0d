//! Request and response bodies for the JSON endpoints.
//!
//! Request bodies are parsed into explicit schemas and validated in a single pass before any business logic runs.
//! Absent, `null` and empty-string fields all count as missing, and every missing field is reported at once.
use alsium_common::Paise;
use alsium_engine::{PaymentConfirmation, UserProfile};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::ServerError;

pub const PAYMENT_VERIFIED_STATUS: &str = "Payment verified and user saved to Google Sheet";

/// Parses a JSON request body. An empty body or a literal `null` yields the schema's default.
pub fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ServerError::InvalidRequestBody(e.to_string()))
}

//-------------------------------------------------  create_order  -----------------------------------------------------
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub amount: Option<Paise>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub amount: Paise,
    pub currency: String,
    pub key: String,
}

//-------------------------------------------------  verify_payment  ---------------------------------------------------
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub razorpay_order_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub razorpay_payment_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub razorpay_signature: Option<String>,
    #[serde(default)]
    pub user_data: Option<UserData>,
}

/// User details as the payment page submits them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub ig_username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub status: String,
    pub user: String,
}

impl VerifyPaymentRequest {
    /// Checks that every required field is present and non-empty, and splits the request into its payment and user
    /// halves. Fails with the full list of missing fields.
    pub fn validate(self) -> Result<(PaymentConfirmation, UserProfile), ServerError> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, name: &str| -> String {
            match value.filter(|v| !v.is_empty()) {
                Some(v) => v,
                None => {
                    missing.push(name.to_string());
                    String::default()
                },
            }
        };
        let order_id = require(self.razorpay_order_id, "razorpay_order_id");
        let payment_id = require(self.razorpay_payment_id, "razorpay_payment_id");
        let signature = require(self.razorpay_signature, "razorpay_signature");
        let profile = match self.user_data {
            Some(user) => Some(UserProfile {
                handle: require(user.ig_username, "user_data.ig_username"),
                full_name: require(user.full_name, "user_data.full_name"),
                email: require(user.email, "user_data.email"),
                phone: require(user.phone, "user_data.phone"),
                region: require(user.state, "user_data.state"),
            }),
            None => {
                require(None, "user_data");
                None
            },
        };
        match profile {
            Some(profile) if missing.is_empty() => {
                Ok((PaymentConfirmation { order_id, payment_id, signature }, profile))
            },
            _ => Err(ServerError::MissingFields(missing)),
        }
    }
}

/// Accepts strings and numbers (phone numbers in particular tend to arrive as numbers). `null` is treated as absent.
fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where D: Deserializer<'de> {
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("expected a string, found {other}"))),
    }
}
