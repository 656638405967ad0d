use thiserror::Error;

use crate::data_types::LedgerRow;

#[derive(Debug, Clone, Error)]
pub enum LedgerStoreError {
    #[error("Ledger is unavailable. {0}")]
    Unavailable(String),
    #[error("{0}")]
    Rejected(String),
}

/// An append-only record of verified payments.
///
/// There is deliberately no read, update or delete method. Each call to [`LedgerStore::append_row`] adds exactly one
/// row after the last existing row.
#[allow(async_fn_in_trait)]
pub trait LedgerStore {
    async fn append_row(&self, row: &LedgerRow) -> Result<(), LedgerStoreError>;
}
