//! # Checkout payment signatures
//!
//! When a customer completes a payment in the checkout widget, the widget hands the browser three values: the order
//! id, the payment id, and a signature. The browser forwards them to us, and we must confirm that the signature was
//! produced by the gateway before recording the payment. Otherwise anyone could post a made-up payment id and get
//! themselves added to the ledger.
//!
//! ## Message format
//!
//! ```text
//!    {order_id}|{payment_id}
//! ```
//!
//! The message is signed with HMAC-SHA256, keyed with the account's API key secret, and rendered as lowercase hex.
//! The claimed signature must match this rendering exactly.

use alsium_common::Secret;
use hmac::{Hmac, Mac};
use log::*;
use sha2::Sha256;

use crate::data_types::PaymentConfirmation;

type HmacSha256 = Hmac<Sha256>;

pub fn signature_message(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}

fn signature_mac(secret: &str, order_id: &str, payment_id: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signature_message(order_id, payment_id).as_bytes());
    mac
}

/// Calculates the lowercase hex HMAC-SHA256 signature for the given order and payment ids.
pub fn payment_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    hex::encode(signature_mac(secret, order_id, payment_id).finalize().into_bytes())
}

/// Decodes a claimed signature. Only lowercase hex is accepted.
fn decode_signature(signature: &str) -> Option<Vec<u8>> {
    if !signature.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return None;
    }
    hex::decode(signature).ok()
}

/// Checks checkout signatures against the gateway's API secret.
#[derive(Debug, Clone)]
pub struct PaymentVerifier {
    secret: Secret<String>,
}

impl PaymentVerifier {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }

    /// The comparison runs in constant time over the decoded bytes.
    pub fn verify(&self, confirmation: &PaymentConfirmation) -> bool {
        trace!("🔐️ Checking signature for payment {}", confirmation.payment_id);
        let valid = decode_signature(&confirmation.signature).is_some_and(|claimed| {
            signature_mac(self.secret.reveal(), &confirmation.order_id, &confirmation.payment_id)
                .verify_slice(&claimed)
                .is_ok()
        });
        if valid {
            trace!("🔐️ Signature for payment {} ✅️", confirmation.payment_id);
        } else {
            warn!(
                "🔐️ Invalid signature for payment {} on order {}",
                confirmation.payment_id, confirmation.order_id
            );
        }
        valid
    }
}
