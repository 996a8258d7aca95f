use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::constants::{SHEETS_API_BASE, SHEETS_SPREADSHEET_ID_ENV};
use crate::errors::{VisaidError, VisaidResult};
use crate::structs::config::sheets_config::SheetsConfig;
use crate::traits::tabular_backend::TabularBackend;

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct SpreadsheetInfo {
    #[serde(default)]
    sheets: Vec<SheetInfo>,
}

#[derive(Deserialize)]
struct SheetInfo {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

/// Spreadsheet values backend. The spreadsheet id comes from config or the
/// environment; the access token is read from the environment on every call
/// so a rotated token is picked up without a restart.
pub struct SheetsClient {
    client: Client,
    spreadsheet_id: Option<String>,
    access_token_env: String,
}

impl SheetsClient {
    pub fn from_config(config: &SheetsConfig) -> Self {
        let spreadsheet_id = config
            .spreadsheet_id
            .clone()
            .or_else(|| std::env::var(SHEETS_SPREADSHEET_ID_ENV).ok())
            .filter(|id| !id.trim().is_empty());

        if spreadsheet_id.is_none() {
            log::warn!("⚠️ No spreadsheet id configured; template reads will fall back to seeds");
        }

        Self {
            client: Client::new(),
            spreadsheet_id,
            access_token_env: config.access_token_env.clone(),
        }
    }

    fn credentials(&self, operation: &str) -> VisaidResult<(String, String)> {
        let spreadsheet_id = self
            .spreadsheet_id
            .clone()
            .ok_or_else(|| VisaidError::store_unavailable(operation, "no spreadsheet id configured"))?;
        let token = std::env::var(&self.access_token_env).map_err(|_| {
            VisaidError::store_unavailable(
                operation,
                &format!("access token env var {} is not set", self.access_token_env),
            )
        })?;
        Ok((spreadsheet_id, token))
    }

    async fn check_status(operation: &str, response: reqwest::Response) -> VisaidResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(VisaidError::store_unavailable(
            operation,
            &format!("HTTP {}: {}", status, body),
        ))
    }
}

#[async_trait]
impl TabularBackend for SheetsClient {
    async fn read_range(&self, range: &str) -> VisaidResult<Vec<Vec<String>>> {
        let (spreadsheet_id, token) = self.credentials("read")?;
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_API_BASE,
            spreadsheet_id,
            urlencoding::encode(range)
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| VisaidError::store_unavailable("read", &e.to_string()))?;
        let response = Self::check_status("read", response).await?;

        let value_range: ValueRange = response
            .json()
            .await
            .map_err(|e| VisaidError::store_unavailable("read", &e.to_string()))?;
        Ok(value_range.values)
    }

    async fn write_range(&self, range: &str, rows: Vec<Vec<String>>) -> VisaidResult<()> {
        let (spreadsheet_id, token) = self.credentials("write")?;
        let url = format!(
            "{}/{}/values/{}?valueInputOption=RAW",
            SHEETS_API_BASE,
            spreadsheet_id,
            urlencoding::encode(range)
        );

        let response = self
            .client
            .put(&url)
            .bearer_auth(&token)
            .json(&json!({ "values": rows }))
            .send()
            .await
            .map_err(|e| VisaidError::store_unavailable("write", &e.to_string()))?;
        Self::check_status("write", response).await?;
        Ok(())
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> VisaidResult<()> {
        let (spreadsheet_id, token) = self.credentials("append")?;
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
            SHEETS_API_BASE,
            spreadsheet_id,
            urlencoding::encode(range)
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({ "values": rows }))
            .send()
            .await
            .map_err(|e| VisaidError::store_unavailable("append", &e.to_string()))?;
        Self::check_status("append", response).await?;
        Ok(())
    }

    async fn sheet_titles(&self) -> VisaidResult<Vec<String>> {
        let (spreadsheet_id, token) = self.credentials("list sheets")?;
        let url = format!(
            "{}/{}?fields=sheets.properties.title",
            SHEETS_API_BASE, spreadsheet_id
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| VisaidError::store_unavailable("list sheets", &e.to_string()))?;
        let response = Self::check_status("list sheets", response).await?;

        let info: SpreadsheetInfo = response
            .json()
            .await
            .map_err(|e| VisaidError::store_unavailable("list sheets", &e.to_string()))?;
        Ok(info.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    async fn add_sheet(&self, title: &str) -> VisaidResult<()> {
        let (spreadsheet_id, token) = self.credentials("add sheet")?;
        let url = format!("{}/{}:batchUpdate", SHEETS_API_BASE, spreadsheet_id);
        let body = json!({
            "requests": [
                { "addSheet": { "properties": { "title": title } } }
            ]
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| VisaidError::store_unavailable("add sheet", &e.to_string()))?;
        Self::check_status("add sheet", response).await?;
        Ok(())
    }
}
