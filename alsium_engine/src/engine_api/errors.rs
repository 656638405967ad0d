use thiserror::Error;

use crate::traits::{LedgerStoreError, OrderGatewayError};

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("{0}")]
    Gateway(#[from] OrderGatewayError),
}

#[derive(Debug, Clone, Error)]
pub enum LedgerApiError {
    #[error("{0}")]
    Store(#[from] LedgerStoreError),
}
