//! `ax routes` command implementation.

use std::path::PathBuf;

use ax_config::{CliSettings, Config};
use ax_server::load_navigation;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover atomix.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation YAML file (overrides config).
    #[arg(short, long)]
    navigation: Option<PathBuf>,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or navigation loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        for path in self.route_paths()? {
            output.result(&path)?;
        }
        Ok(())
    }

    /// Every page path of the configured navigation, in navigation order.
    fn route_paths(&self) -> Result<Vec<String>, CliError> {
        let cli_settings = CliSettings {
            navigation_file: self.navigation.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let navigation = load_navigation(config.navigation_resolved.file.as_deref())?;
        Ok(navigation.all_route_paths())
    }
}
