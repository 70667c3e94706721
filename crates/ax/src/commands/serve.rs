//! `ax serve` command implementation.

use std::path::PathBuf;

use ax_config::{CliSettings, Config};
use ax_server::{run_server, server_config_from_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover atomix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown document root (overrides config).
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Navigation YAML file (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and startup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            docs_root: self.root,
            navigation_file: self.navigation,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.highlight(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Document root: {}",
            config.docs_resolved.root.display()
        ));
        if !config.docs_resolved.root.is_dir() {
            output.warning("Document root does not exist, markdown requests will fail");
        }

        match &config.navigation_resolved.file {
            Some(file) => output.info(&format!("Navigation: {}", file.display())),
            None => output.info("Navigation: built-in"),
        }

        if !config.redirects.is_empty() {
            output.info(&format!("Redirects: {}", config.redirects.len()));
        }

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
