//! Just enough of the Google Sheets and Drive REST APIs to append rows to a spreadsheet.
//!
//! Authentication uses a service account: a signed JWT assertion is exchanged for a short-lived OAuth2 access token,
//! which is cached and refreshed shortly before it expires. The spreadsheet is located by its title through the Drive
//! API, so the service account must have been granted access to it.
mod api;
mod auth;
mod config;
mod credentials;
mod data_objects;
mod error;

pub use api::{SheetsApi, Worksheet};
pub use auth::{AccessToken, AssertionClaims, SCOPES};
pub use config::{SheetsConfig, DEFAULT_DRIVE_URL, DEFAULT_SHEETS_URL, DEFAULT_SHEET_NAME};
pub use credentials::{CredentialSource, ServiceAccountKey, DEFAULT_SERVICE_ACCOUNT_FILE};
pub use data_objects::{AppendResponse, UpdatedRange};
pub use error::SheetsApiError;
