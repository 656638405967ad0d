//! # Alsium payment server
//! This crate hosts the web server for Alsium. It is responsible for:
//! * Serving the landing, payment and sheet-integration pages.
//! * Creating payment orders at Razorpay for the checkout widget on the payment page.
//! * Checking the signature the checkout widget returns after a payment, and recording verified payments in the
//!   ledger spreadsheet.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/`, `/payment`, `/int_sheet`: The HTML pages.
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/create_order`: Creates an order at the payment gateway.
//! * `/verify_payment`: Verifies a completed payment and appends it to the ledger.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod pages;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
