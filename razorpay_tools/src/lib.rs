//! A thin client for the parts of the Razorpay REST API the payment server needs.
//!
//! Only order creation is covered. Payments themselves happen out-of-band in Razorpay's checkout widget; the server
//! just needs an order id to hand to the widget, and later checks the signature the widget returns.
mod api;
mod config;
mod data_objects;
mod error;

pub use api::RazorpayApi;
pub use config::{RazorpayConfig, DEFAULT_RAZORPAY_API_URL};
pub use data_objects::{NewRazorpayOrder, RazorpayErrorDetail, RazorpayErrorEnvelope, RazorpayOrder};
pub use error::RazorpayApiError;
