use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid service account credentials: {0}")]
    Credentials(String),
    #[error("Could not obtain an access token: {0}")]
    TokenExchange(String),
    #[error("Invalid REST response: {0}")]
    RestResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),
    #[error("Spreadsheet {0} has no worksheets")]
    NoWorksheets(String),
}
