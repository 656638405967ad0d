//! The records that flow through the engine. None of them are stored locally: orders live at the gateway, and ledger
//! rows live in the ledger store.
use std::fmt::Display;

use alsium_common::{Paise, INR_CURRENCY_CODE};
use serde::{Deserialize, Serialize};

/// Order amount used when the client does not ask for one. ₹12.00.
pub const DEFAULT_ORDER_AMOUNT: i64 = 1200;
pub const GUEST_USER_ID: &str = "guest";
pub const RECEIPT_PREFIX: &str = "order_rcptid_";
/// Status marker written into the last column of every ledger row.
pub const LEDGER_STATUS_SUCCESS: &str = "success";

pub fn receipt_for(user_id: &str) -> String {
    format!("{RECEIPT_PREFIX}{user_id}")
}

//--------------------------------------     NewOrder        ---------------------------------------------------------
/// An order creation request, as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
}

impl NewOrder {
    /// Builds an INR order for the given user, filling in the default amount and the `guest` user id.
    pub fn for_user(amount: Option<Paise>, user_id: Option<&str>) -> Self {
        let amount = amount.unwrap_or(Paise::from(DEFAULT_ORDER_AMOUNT));
        let receipt = receipt_for(user_id.unwrap_or(GUEST_USER_ID));
        Self { amount, currency: INR_CURRENCY_CODE.to_string(), receipt }
    }
}

//--------------------------------------       Order         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order {} ({} {}, receipt {})", self.id, self.amount, self.currency, self.receipt)
    }
}

//--------------------------------------  PaymentConfirmation ---------------------------------------------------------
/// What the checkout widget hands back once a payment completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

//--------------------------------------     UserProfile     ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Instagram handle
    pub handle: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Indian state or union territory
    pub region: String,
}

//--------------------------------------      LedgerRow      ---------------------------------------------------------
/// One row in the ledger. [`LedgerRow::to_values`] fixes the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub handle: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub order_id: String,
    pub payment_id: String,
    pub status: String,
}

impl LedgerRow {
    /// Builds the row for a payment whose signature has already been checked.
    pub fn verified(confirmation: &PaymentConfirmation, profile: &UserProfile) -> Self {
        Self {
            handle: profile.handle.clone(),
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            region: profile.region.clone(),
            order_id: confirmation.order_id.clone(),
            payment_id: confirmation.payment_id.clone(),
            status: LEDGER_STATUS_SUCCESS.to_string(),
        }
    }

    pub fn to_values(&self) -> Vec<String> {
        vec![
            self.handle.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.region.clone(),
            self.order_id.clone(),
            self.payment_id.clone(),
            self.status.clone(),
        ]
    }
}
