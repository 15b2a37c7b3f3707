// Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use statline_core::config::{self, Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "statline")]
#[command(about = "Interactive baseball season statistics dashboard")]
pub struct Args {
    /// Directory holding `config/` and `defaults/`.
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Season-stats CSV to load instead of `data.path`.
    #[arg(long)]
    pub data: Option<String>,

    /// Override `server.http_port`.
    #[arg(long)]
    pub http_port: Option<u16>,

    /// Override `server.ws_port`.
    #[arg(long)]
    pub ws_port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the dashboard (default).
    Serve,

    /// Write a synthetic season-stats CSV and exit.
    GenerateSample {
        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// Config for `generate-sample`, which also runs outside a configured
    /// directory. Only an existing `config/` is read and nothing is copied.
    pub fn sample_config(&self) -> Option<Config> {
        config::load_config_from(&self.base_dir).ok()
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(data) = &self.data {
            config.data.path = data.clone();
        }
        if let Some(port) = self.http_port {
            config.server.http_port = port;
        }
        if let Some(port) = self.ws_port {
            config.server.ws_port = port;
        }
        config::validate(&config)?;
        Ok(config)
    }
}
