use std::sync::Arc;

use log::*;
use reqwest::{Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

use crate::{
    auth::TokenProvider,
    data_objects::{AppendResponse, DriveFileList, GoogleErrorEnvelope, SpreadsheetMeta},
    ServiceAccountKey,
    SheetsApiError,
    SheetsConfig,
};

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Clone)]
pub struct SheetsApi {
    config: SheetsConfig,
    client: Arc<Client>,
    tokens: Arc<TokenProvider>,
}

impl SheetsApi {
    /// Loads the service account key named in the configuration and builds a client. No network calls are made until
    /// the first query.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsApiError> {
        let key = config.credentials.load()?;
        Self::with_key(config, key)
    }

    pub fn with_key(config: SheetsConfig, key: ServiceAccountKey) -> Result<Self, SheetsApiError> {
        let client = Client::builder().build().map_err(|e| SheetsApiError::Initialization(e.to_string()))?;
        let client = Arc::new(client);
        let tokens = Arc::new(TokenProvider::new(key, Arc::clone(&client)));
        Ok(Self { config, client, tokens })
    }

    pub fn service_account(&self) -> &str {
        self.tokens.client_email()
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<B>,
    ) -> Result<T, SheetsApiError> {
        let token = self.tokens.access_token().await?;
        trace!("📒️ Sending REST query: {method} {url}");
        let mut req = self.client.request(method, url).bearer_auth(token);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| SheetsApiError::RestResponseError(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            trace!("📒️ REST query successful. {status}");
            response.json::<T>().await.map_err(|e| SheetsApiError::JsonError(e.to_string()))
        } else {
            let body = response.text().await.map_err(|e| SheetsApiError::RestResponseError(e.to_string()))?;
            let message = serde_json::from_str::<GoogleErrorEnvelope>(&body)
                .map(|e| format!("{} {}", e.error.status, e.error.message))
                .unwrap_or(body);
            Err(SheetsApiError::QueryError { status: status.as_u16(), message })
        }
    }

    /// Finds the id of the spreadsheet with the given title. If several spreadsheets share the title, the first one
    /// Drive returns wins.
    pub async fn find_spreadsheet(&self, name: &str) -> Result<String, SheetsApiError> {
        let url = Url::parse_with_params(&self.config.drive_url, &[
            ("q", drive_query(name).as_str()),
            ("fields", "files(id,name)"),
            ("pageSize", "10"),
            ("supportsAllDrives", "true"),
            ("includeItemsFromAllDrives", "true"),
        ])
        .map_err(|e| SheetsApiError::Initialization(e.to_string()))?;
        let list = self.rest_query::<DriveFileList, ()>(Method::GET, url, None).await?;
        let file = list.files.into_iter().next().ok_or_else(|| {
            warn!(
                "📒️ No spreadsheet called '{name}' is visible to {}. Has it been shared with the service account?",
                self.service_account()
            );
            SheetsApiError::SpreadsheetNotFound(name.to_string())
        })?;
        debug!("📒️ Spreadsheet '{}' has id {}", file.name, file.id);
        Ok(file.id)
    }

    pub async fn first_worksheet_title(&self, spreadsheet_id: &str) -> Result<String, SheetsApiError> {
        let mut url = self.spreadsheet_url(spreadsheet_id, &[])?;
        url.query_pairs_mut().append_pair("fields", "sheets.properties");
        let meta = self.rest_query::<SpreadsheetMeta, ()>(Method::GET, url, None).await?;
        meta.sheets
            .into_iter()
            .min_by_key(|s| s.properties.index)
            .map(|s| s.properties.title)
            .ok_or_else(|| SheetsApiError::NoWorksheets(spreadsheet_id.to_string()))
    }

    /// Resolves the spreadsheet by title and returns a handle to its first worksheet.
    pub async fn open_first_worksheet(&self, name: &str) -> Result<Worksheet, SheetsApiError> {
        let spreadsheet_id = self.find_spreadsheet(name).await?;
        let title = self.first_worksheet_title(&spreadsheet_id).await?;
        info!("📒️ Ledger rows will be appended to '{title}' in spreadsheet '{name}'");
        Ok(Worksheet { api: self.clone(), spreadsheet_id, title })
    }

    pub async fn append_row(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
        values: &[String],
    ) -> Result<AppendResponse, SheetsApiError> {
        let url = self.append_url(spreadsheet_id, sheet_title)?;
        let body = json!({ "values": [values] });
        let result = self.rest_query::<AppendResponse, _>(Method::POST, url, Some(body)).await?;
        debug!("📒️ Appended {} cells at {}", result.updates.updated_cells, result.updates.updated_range);
        Ok(result)
    }

    pub fn append_url(&self, spreadsheet_id: &str, sheet_title: &str) -> Result<Url, SheetsApiError> {
        let range = format!("{}:append", quote_sheet_title(sheet_title));
        let mut url = self.spreadsheet_url(spreadsheet_id, &["values", range.as_str()])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");
        Ok(url)
    }

    fn spreadsheet_url(&self, spreadsheet_id: &str, segments: &[&str]) -> Result<Url, SheetsApiError> {
        let mut url = Url::parse(&self.config.sheets_url).map_err(|e| SheetsApiError::Initialization(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| SheetsApiError::Initialization(format!("{} cannot be a base URL", self.config.sheets_url)))?;
            path.pop_if_empty().push(spreadsheet_id).extend(segments);
        }
        Ok(url)
    }
}

/// A handle to a single worksheet, resolved once and then used for every append.
#[derive(Clone)]
pub struct Worksheet {
    api: SheetsApi,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet {
    pub fn spreadsheet_id(&self) -> &str {
        self.spreadsheet_id.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Appends `values` as a new row after the last row of the worksheet's data table.
    pub async fn append_row(&self, values: &[String]) -> Result<AppendResponse, SheetsApiError> {
        self.api.append_row(&self.spreadsheet_id, &self.title, values).await
    }
}

/// A1 notation requires sheet titles to be single-quoted, with embedded quotes doubled.
pub fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Drive search query for a non-trashed spreadsheet with exactly this title.
pub fn drive_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' and mimeType = '{SPREADSHEET_MIME_TYPE}' and trashed = false")
}
