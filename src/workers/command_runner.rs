use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{VisaidError, VisaidResult};
use crate::server::analysis_server::{AnalysisServer, AppContext};
use crate::services::openai::OpenAiClient;
use crate::services::sheets::SheetsClient;
use crate::services::template_store::TemplateStore;
use crate::structs::config::config::Config;
use crate::traits::completion_client::CompletionClient;
use crate::traits::tabular_backend::TabularBackend;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> VisaidResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::InitStore => self.init_store_command().await,
            Commands::Serve { port } => self.serve_command(port).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> VisaidResult<()> {
        log::info!("🚀 Initializing visaid configuration...");

        match ConfigManager::create_sample_config() {
            Ok(()) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to point at your spreadsheet.");
                log::info!("🔧 Run 'visaid validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> VisaidResult<()> {
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid.");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                Err(VisaidError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                ))
            }
        }
    }

    async fn init_store_command(&self) -> VisaidResult<()> {
        let config = self.load_config()?;
        let templates = build_template_store(&config);

        log::info!("🛠️ Creating template store tabs...");
        templates.initialize().await?;
        log::info!("✅ Template store is ready.");
        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>) -> VisaidResult<()> {
        let config = self.load_config()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(VisaidError::config_error(
                "configuration is invalid; run 'visaid validate'",
                None,
            ));
        }

        let api_key = std::env::var(&config.ai.api_key_env).map_err(|_| {
            VisaidError::config_error(
                &format!("completion API key env var {} is not set", config.ai.api_key_env),
                Some("ai.api_key_env"),
            )
        })?;

        let completion: Arc<dyn CompletionClient> =
            Arc::new(OpenAiClient::new(api_key, &config.ai));
        let templates = build_template_store(&config);

        let context = Arc::new(AppContext {
            completion,
            templates,
        });

        let port = port.unwrap_or(config.server.port);
        AnalysisServer::new(context, port).run().await
    }

    fn load_config(&self) -> VisaidResult<Config> {
        match ConfigManager::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'visaid init' to create a configuration file.");
                Err(e)
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn build_template_store(config: &Config) -> Arc<TemplateStore> {
    let backend: Arc<dyn TabularBackend> = Arc::new(SheetsClient::from_config(&config.store));
    Arc::new(TemplateStore::new(backend))
}
