use alsium_common::Paise;
use log::*;
use razorpay_tools::{NewRazorpayOrder, RazorpayApi, RazorpayApiError};

use crate::{
    data_types::{NewOrder, Order},
    traits::{OrderGateway, OrderGatewayError},
};

impl From<RazorpayApiError> for OrderGatewayError {
    fn from(e: RazorpayApiError) -> Self {
        match e {
            RazorpayApiError::Initialization(s) | RazorpayApiError::RestResponseError(s) => Self::Unreachable(s),
            RazorpayApiError::JsonError(s) => Self::InvalidResponse(s),
            RazorpayApiError::QueryError { message, .. } => Self::Rejected(message),
        }
    }
}

impl OrderGateway for RazorpayApi {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, OrderGatewayError> {
        let request = NewRazorpayOrder {
            amount: order.amount.value(),
            currency: order.currency.clone(),
            receipt: order.receipt.clone(),
        };
        let result = RazorpayApi::create_order(self, &request).await?;
        if result.receipt.as_deref().is_some_and(|r| r != order.receipt) {
            warn!(
                "💳️ Razorpay order {} came back with receipt {:?}, expected {}",
                result.id, result.receipt, order.receipt
            );
        }
        Ok(Order {
            id: result.id,
            amount: Paise::from(result.amount),
            currency: result.currency,
            receipt: result.receipt.unwrap_or_else(|| order.receipt.clone()),
        })
    }
}
