//! Unifies API for creating payment orders.

use std::fmt::Debug;

use alsium_common::Paise;
use log::*;

use crate::{
    data_types::{NewOrder, Order},
    engine_api::errors::OrderFlowError,
    traits::OrderGateway,
};

pub struct OrderFlowApi<B> {
    gateway: B,
}

impl<B: Debug> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi ({:?})", self.gateway)
    }
}

impl<B> OrderFlowApi<B>
where B: OrderGateway
{
    pub fn new(gateway: B) -> Self {
        Self { gateway }
    }

    /// Creates an INR order at the gateway. `amount` defaults to ₹12.00 and `user_id` to `guest`; the user id only
    /// ends up in the order's receipt reference.
    ///
    /// Gateway failures are not retried.
    pub async fn create_order(&self, amount: Option<Paise>, user_id: Option<&str>) -> Result<Order, OrderFlowError> {
        let new_order = NewOrder::for_user(amount, user_id);
        debug!("🔄️ Creating order for {} (receipt {})", new_order.amount, new_order.receipt);
        let order = self.gateway.create_order(&new_order).await.map_err(|e| {
            warn!("🔄️ Could not create order for receipt {}. {e}", new_order.receipt);
            OrderFlowError::from(e)
        })?;
        info!("🔄️ {order} created");
        Ok(order)
    }
}
