//! Alsium Payment Engine
//!
//! The provider-agnostic core of the payment server. It knows how to
//! 1. create a payment order through an [`OrderGateway`] ([`OrderFlowApi`]),
//! 2. check the signature that the checkout widget hands back after a payment ([`helpers::PaymentVerifier`]), and
//! 3. record a verified payment in a [`LedgerStore`] ([`LedgerApi`]).
//!
//! The traits are implemented for the Razorpay client (feature `razorpay`) and for a Google Sheets worksheet
//! (feature `sheets`). Both features are on by default.
pub mod data_types;
pub mod helpers;
mod engine_api;
mod traits;

#[cfg(feature = "razorpay")]
mod razorpay;
#[cfg(feature = "sheets")]
mod sheets;

pub use data_types::{LedgerRow, NewOrder, Order, PaymentConfirmation, UserProfile};
pub use engine_api::{
    errors::{LedgerApiError, OrderFlowError},
    ledger_api::LedgerApi,
    order_flow_api::OrderFlowApi,
};
pub use traits::{LedgerStore, LedgerStoreError, OrderGateway, OrderGatewayError};
