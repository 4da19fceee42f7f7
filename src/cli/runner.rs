//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::http::PrintfulClient;
use crate::sink::JsonlSink;
use crate::source::PrintfulSource;
use crate::types::JsonValue;
use std::path::Path;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Sync { output } => self.sync(output).await,
            Commands::Check => self.check().await,
            Commands::Spec => self.spec(),
        }
    }

    /// Load configuration from the file or inline JSON flag
    fn load_config(&self) -> Result<SourceConfig> {
        if let Some(json) = &self.cli.config_json {
            return SourceConfig::from_json_str(json);
        }
        if let Some(path) = &self.cli.config {
            return SourceConfig::from_yaml_file(path);
        }
        Err(Error::config(
            "no configuration given (use --config or --config-json)",
        ))
    }

    /// Run the connector into a JSONL sink
    async fn sync(&self, output: &Path) -> Result<()> {
        let config = self.load_config()?;
        let source = PrintfulSource::new(config)?;
        let sink = JsonlSink::new(output)?;

        source.run(Arc::new(sink)).await?;

        println!("Sync complete, collections written to {}", output.display());
        Ok(())
    }

    /// Issue one authenticated request to verify the API key
    async fn check(&self) -> Result<()> {
        let config = self.load_config()?;
        config.validate()?;

        let client = PrintfulClient::new(&config.api_key)?;
        let _: JsonValue = client.get_json("countries").await?;

        println!("Connection OK");
        Ok(())
    }

    /// Print the default configuration as YAML
    fn spec(&self) -> Result<()> {
        let yaml = serde_yaml::to_string(&SourceConfig::default())?;
        print!("{yaml}");
        Ok(())
    }
}
