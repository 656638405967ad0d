use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /orders`. Amounts are in the currency's minor unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRazorpayOrder {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

/// The order entity returned by Razorpay. Only `id`, `amount` and `currency` are guaranteed; the rest is kept for
/// logging and reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount_paid: Option<i64>,
    #[serde(default)]
    pub amount_due: Option<i64>,
    #[serde(default)]
    pub attempts: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub notes: Value,
}

/// Razorpay wraps every non-2xx response in `{"error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayErrorEnvelope {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
