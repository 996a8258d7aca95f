use serde::{Deserialize, Serialize};

use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::sheets_config::SheetsConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub store: SheetsConfig,
}
