use alsium_common::Secret;
use log::*;

pub const DEFAULT_RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// The public key id, e.g. `rzp_test_abc123`. This value is safe to hand to browsers.
    pub key_id: String,
    /// The API secret. Used for basic auth against the API, and as the HMAC key for checkout signatures.
    pub key_secret: Secret<String>,
    pub api_url: String,
}

impl Default for RazorpayConfig {
    fn default() -> Self {
        Self { key_id: String::default(), key_secret: Secret::default(), api_url: DEFAULT_RAZORPAY_API_URL.into() }
    }
}

impl RazorpayConfig {
    pub fn new(key_id: &str, key_secret: &str) -> Self {
        Self { key_id: key_id.to_string(), key_secret: Secret::from(key_secret), ..Default::default() }
    }

    pub fn new_from_env_or_default() -> Self {
        let key_id = std::env::var("RAZORPAY_KEY_ID").unwrap_or_else(|_| {
            error!("🪛️ RAZORPAY_KEY_ID is not set. Please set it to the key id of your Razorpay account.");
            String::default()
        });
        let key_secret = Secret::new(std::env::var("RAZORPAY_KEY_SECRET").unwrap_or_else(|_| {
            error!(
                "🪛️ RAZORPAY_KEY_SECRET is not set. Order creation and payment verification will fail until it is set."
            );
            String::default()
        }));
        let api_url = std::env::var("RAZORPAY_API_URL").unwrap_or_else(|_| DEFAULT_RAZORPAY_API_URL.to_string());
        Self { key_id, key_secret, api_url }
    }
}
