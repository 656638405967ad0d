use log::*;
use sheets_tools::{SheetsApiError, Worksheet};

use crate::{
    data_types::LedgerRow,
    traits::{LedgerStore, LedgerStoreError},
};

impl From<SheetsApiError> for LedgerStoreError {
    fn from(e: SheetsApiError) -> Self {
        match e {
            SheetsApiError::QueryError { .. } |
            SheetsApiError::SpreadsheetNotFound(_) |
            SheetsApiError::NoWorksheets(_) => Self::Rejected(e.to_string()),
            _ => Self::Unavailable(e.to_string()),
        }
    }
}

impl LedgerStore for Worksheet {
    async fn append_row(&self, row: &LedgerRow) -> Result<(), LedgerStoreError> {
        let result = Worksheet::append_row(self, &row.to_values()).await?;
        trace!("📒️ Row for payment {} written to {}", row.payment_id, result.updates.updated_range);
        Ok(())
    }
}
