//! Unifies API for recording verified payments.

use std::fmt::Debug;

use log::*;

use crate::{data_types::LedgerRow, engine_api::errors::LedgerApiError, traits::LedgerStore};

pub struct LedgerApi<B> {
    store: B,
}

impl<B: Debug> Debug for LedgerApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LedgerApi ({:?})", self.store)
    }
}

impl<B> LedgerApi<B>
where B: LedgerStore
{
    pub fn new(store: B) -> Self {
        Self { store }
    }

    /// Appends the row to the ledger. Callers must only pass rows built with [`LedgerRow::verified`] after the
    /// payment signature has been checked. Duplicate rows are not detected.
    pub async fn append(&self, row: LedgerRow) -> Result<LedgerRow, LedgerApiError> {
        debug!("📒️ Recording payment {} for {}", row.payment_id, row.handle);
        self.store.append_row(&row).await.map_err(|e| {
            warn!("📒️ Could not record payment {} on order {}. {e}", row.payment_id, row.order_id);
            LedgerApiError::from(e)
        })?;
        info!("📒️ Payment {} on order {} recorded for {}", row.payment_id, row.order_id, row.handle);
        Ok(row)
    }
}
