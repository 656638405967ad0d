use std::env;

use alsium_common::Secret;
use log::*;
use razorpay_tools::RazorpayConfig;
use sheets_tools::SheetsConfig;

const DEFAULT_ALSIUM_HOST: &str = "127.0.0.1";
const DEFAULT_ALSIUM_PORT: u16 = 5000;
const DEFAULT_SECRET_KEY: &str = "goa12L";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Session signing secret. No route currently issues sessions, but deployments already set it, so it is carried
    /// through for when they do.
    pub secret_key: Secret<String>,
    /// Razorpay API credentials. The key secret doubles as the checkout signature key.
    pub razorpay: RazorpayConfig,
    /// Where verified payments are recorded
    pub sheets: SheetsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ALSIUM_HOST.to_string(),
            port: DEFAULT_ALSIUM_PORT,
            secret_key: Secret::from(DEFAULT_SECRET_KEY),
            razorpay: RazorpayConfig::default(),
            sheets: SheetsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("ALSIUM_HOST").ok().unwrap_or_else(|| DEFAULT_ALSIUM_HOST.into());
        let port = env::var("ALSIUM_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for ALSIUM_PORT. {e} Using the default, {DEFAULT_ALSIUM_PORT}, \
                         instead."
                    );
                    DEFAULT_ALSIUM_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_ALSIUM_PORT);
        let secret_key = env::var("SECRET_KEY").map(Secret::new).unwrap_or_else(|_| {
            warn!("🪛️ SECRET_KEY is not set. Using the built-in default. Set SECRET_KEY in production.");
            Secret::from(DEFAULT_SECRET_KEY)
        });
        let razorpay = RazorpayConfig::new_from_env_or_default();
        let sheets = SheetsConfig::new_from_env_or_default();
        Self { host, port, secret_key, razorpay, sheets }
    }
}

//-------------------------------------------------  CheckoutOptions  --------------------------------------------------
/// The public, browser-facing part of the gateway configuration. Handlers get this instead of the full config so that
/// secrets never get near a response body.
#[derive(Clone, Debug, Default)]
pub struct CheckoutOptions {
    pub razorpay_key_id: String,
}

impl CheckoutOptions {
    pub fn new(razorpay_key_id: &str) -> Self {
        Self { razorpay_key_id: razorpay_key_id.to_string() }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&config.razorpay.key_id)
    }
}
