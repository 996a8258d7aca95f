use std::fs;

use crate::errors::{VisaidError, VisaidResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load() -> VisaidResult<Config> {
        let config_location = dirs::home_dir()
            .map(|d| d.join("visaid/config.toml"))
            .unwrap_or_default();

        if config_location.exists() {
            log::info!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> VisaidResult<()> {
        let sample_config = r#"# Visaid Server Configuration

[server]
# Port the analysis and admin API listens on
port = 8080

# Completion endpoint
[ai]
model = "gpt-4.1"
temperature = 0.7
# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"
base_url = "https://api.openai.com/v1"

# Template store backend
[store]
# Spreadsheet holding the template tabs; may also be supplied via the
# GOOGLE_SHEETS_SPREADSHEET_ID environment variable
# spreadsheet_id = "1AbC..."
access_token_env = "GOOGLE_SHEETS_ACCESS_TOKEN"
"#;
        let config_dir = dirs::home_dir()
            .map(|d| d.join("visaid"))
            .ok_or_else(|| VisaidError::system_error("init", "could not resolve home directory"))?;
        let config_path = config_dir.join("config.toml");

        fs::create_dir_all(&config_dir)?;
        fs::write(&config_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!(
                "ai.temperature must be between 0.0 and 2.0 (got {})",
                config.ai.temperature
            ));
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must not be empty".to_string());
        }

        if config.server.port == 0 {
            errors.push("server.port must not be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ConfigManager::validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let mut config = Config::default();
        config.ai.temperature = 3.5;
        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("temperature")));
    }

    #[test]
    fn rejects_empty_model() {
        let mut config = Config::default();
        config.ai.model = "  ".to_string();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
