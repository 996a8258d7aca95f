use serde::{Deserialize, Serialize};

use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet to use; falls back to the GOOGLE_SHEETS_SPREADSHEET_ID
    /// environment variable when unset.
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    #[serde(default = "ConfigHelper::default_access_token_env")]
    pub access_token_env: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            access_token_env: ConfigHelper::default_access_token_env(),
        }
    }
}
