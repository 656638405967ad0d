use thiserror::Error;

use crate::data_types::{NewOrder, Order};

#[derive(Debug, Clone, Error)]
pub enum OrderGatewayError {
    #[error("Could not reach the payment gateway. {0}")]
    Unreachable(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response from the payment gateway. {0}")]
    InvalidResponse(String),
}

/// The `OrderGateway` trait defines how orders are created at a payment gateway.
///
/// Implementations hand the order to the gateway and return the gateway's view of it. The gateway owns the order from
/// then on; nothing is stored locally.
#[allow(async_fn_in_trait)]
pub trait OrderGateway {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, OrderGatewayError>;
}
