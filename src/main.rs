use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use albums_server::album_store::{load_seed_file, AlbumStore, InMemoryAlbumStore};
use albums_server::config::{AppConfig, CliConfig, FileConfig, DEFAULT_HOST, DEFAULT_PORT};
use albums_server::{run_server, RequestsLoggingLevel, ReplaceValidation};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// How strictly PUT /albums/{id} checks the replacement album.
    #[clap(long, default_value = "legacy")]
    pub replace_validation: ReplaceValidation,

    /// JSON file with the albums to start with, instead of the built-in ones.
    #[clap(long)]
    pub seed_file: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            host: self.host.clone(),
            port: self.port,
            logging_level: self.logging_level.clone(),
            replace_validation: self.replace_validation,
            seed_file: self.seed_file.clone(),
        }
    }
}

fn build_album_store(config: &AppConfig) -> Result<InMemoryAlbumStore> {
    match &config.seed_file {
        Some(path) => {
            info!("Loading seed albums from {:?}...", path);
            let albums = load_seed_file(path)?;
            InMemoryAlbumStore::from_albums(albums, config.replace_validation)
                .with_context(|| format!("Invalid seed file {:?}", path))
        }
        None => Ok(InMemoryAlbumStore::new(config.replace_validation)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let album_store = build_album_store(&config)?;
    info!(
        "Album store has {} albums, replace validation is {}",
        album_store.albums_count()?,
        config.replace_validation
    );

    run_server(Arc::new(album_store), config.server_config()).await
}
