mod file_config;

pub use file_config::FileConfig;

use crate::album_store::ReplaceValidation;
use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub replace_validation: ReplaceValidation,
    pub seed_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            logging_level: RequestsLoggingLevel::default(),
            replace_validation: ReplaceValidation::default(),
            seed_file: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub replace_validation: ReplaceValidation,
    /// When unset the store starts with the built-in albums.
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(s) => parse_logging_level(&s)
                .ok_or_else(|| anyhow!("Invalid logging_level in config file: {:?}", s))?,
            None => cli.logging_level.clone(),
        };

        let replace_validation = match file.replace_validation {
            Some(s) => parse_replace_validation(&s)
                .ok_or_else(|| anyhow!("Invalid replace_validation in config file: {:?}", s))?,
            None => cli.replace_validation,
        };

        let seed_file = file
            .seed_file
            .map(PathBuf::from)
            .or_else(|| cli.seed_file.clone());

        Ok(Self {
            host,
            port,
            logging_level,
            replace_validation,
            seed_file,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_replace_validation(s: &str) -> Option<ReplaceValidation> {
    ReplaceValidation::from_str(s, true).ok()
}
