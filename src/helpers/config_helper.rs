use crate::config::constants::{
    DEFAULT_MODEL, DEFAULT_SERVER_PORT, DEFAULT_TEMPERATURE, OPENAI_API_BASE, OPENAI_API_KEY_ENV,
    SHEETS_ACCESS_TOKEN_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        OPENAI_API_BASE.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_access_token_env() -> String {
        SHEETS_ACCESS_TOKEN_ENV.to_string()
    }
}
