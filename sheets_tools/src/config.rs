use log::*;

use crate::credentials::{CredentialSource, DEFAULT_SERVICE_ACCOUNT_FILE};

pub const DEFAULT_SHEET_NAME: &str = "AlsiumPayments";
pub const DEFAULT_SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DEFAULT_DRIVE_URL: &str = "https://www.googleapis.com/drive/v3/files";

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// The title of the spreadsheet that receives ledger rows. Rows are always appended to its first worksheet.
    pub sheet_name: String,
    pub credentials: CredentialSource,
    pub sheets_url: String,
    pub drive_url: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.into(),
            credentials: CredentialSource::File(DEFAULT_SERVICE_ACCOUNT_FILE.into()),
            sheets_url: DEFAULT_SHEETS_URL.into(),
            drive_url: DEFAULT_DRIVE_URL.into(),
        }
    }
}

impl SheetsConfig {
    pub fn new_from_env_or_default() -> Self {
        let sheet_name = std::env::var("GOOGLE_SHEET_NAME").unwrap_or_else(|_| {
            info!("🪛️ GOOGLE_SHEET_NAME is not set. Using the default, {DEFAULT_SHEET_NAME}.");
            DEFAULT_SHEET_NAME.to_string()
        });
        let credentials = CredentialSource::from_env();
        Self { sheet_name, credentials, ..Default::default() }
    }
}
