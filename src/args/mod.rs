//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::directory::FilterField;

#[derive(Debug, Parser)]
#[command(
    name = "userdir",
    version,
    about = "Browse and filter a remote user directory"
)]
pub struct Cli {
    /// Override the endpoint records are fetched from
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the filtered directory as a table and exit instead of opening the TUI
    #[arg(long)]
    pub list: bool,

    /// Only list users whose name contains TEXT
    #[arg(long, value_name = "TEXT", requires = "list")]
    pub name: Option<String>,

    /// Only list users whose username contains TEXT
    #[arg(long, value_name = "TEXT", requires = "list")]
    pub username: Option<String>,

    /// Only list users whose email contains TEXT
    #[arg(long, value_name = "TEXT", requires = "list")]
    pub email: Option<String>,

    /// Only list users whose phone contains TEXT
    #[arg(long, value_name = "TEXT", requires = "list")]
    pub phone: Option<String>,
}

impl Cli {
    /// Filters given on the command line, in field order.
    pub fn filters(&self) -> Vec<(FilterField, String)> {
        FilterField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    FilterField::Name => &self.name,
                    FilterField::Username => &self.username,
                    FilterField::Email => &self.email,
                    FilterField::Phone => &self.phone,
                };
                value.clone().map(|value| (field, value))
            })
            .collect()
    }

    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
            config.validate()?;
        }

        Ok(config)
    }
}
