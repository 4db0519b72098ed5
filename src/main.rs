//! Registry analytics export pipeline
//!
//! Replays civil registration event histories into a Postgres analytics
//! store:
//! - Event import with point-in-time declaration state per action
//! - Idempotent per-action upserts keyed by action id
//! - Location levels and population statistics reference sync

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use event_forms::default_registry;
use postgres_client::{PostgresClient, PostgresConfig};
use registry_core::EventDocument;
use telemetry::{init_tracing_from_env, metrics};
use worker::{
    import_events, sync_location_levels, sync_location_statistics, AdminLevel,
    FileStatisticsProvider,
};

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "registry-analytics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import events from a JSON export file into the analytics store
    Import {
        /// Path to the events JSON file (defaults to the configured import file)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Sync the configured administrative hierarchy into the levels table
    SyncLocationLevels,
    /// Sync yearly population statistics from the statistics file
    SyncLocationStatistics,
}

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default)]
    postgres: PostgresConfig,

    #[serde(default)]
    import: ImportConfig,

    #[serde(default)]
    locations: LocationsConfig,
}

/// Event import configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ImportConfig {
    /// Events export consumed by the import subcommand
    #[serde(default = "default_import_file")]
    file: PathBuf,
}

fn default_import_file() -> PathBuf {
    PathBuf::from("data/events.json")
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            file: default_import_file(),
        }
    }
}

/// Location reference data configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LocationsConfig {
    /// Administrative hierarchy, outermost level first
    #[serde(default = "default_admin_structure")]
    admin_structure: Vec<AdminLevel>,

    /// Statistics feed consumed by sync-location-statistics
    #[serde(default = "default_statistics_file")]
    statistics_file: PathBuf,
}

fn default_admin_structure() -> Vec<AdminLevel> {
    vec![
        AdminLevel {
            id: "PROVINCE".to_string(),
            label: registry_core::Message::new("location.level.province", "Province"),
        },
        AdminLevel {
            id: "DISTRICT".to_string(),
            label: registry_core::Message::new("location.level.district", "District"),
        },
    ]
}

fn default_statistics_file() -> PathBuf {
    PathBuf::from("data/statistics.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            postgres: PostgresConfig::default(),
            import: ImportConfig::default(),
            locations: LocationsConfig::default(),
        }
    }
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            admin_structure: default_admin_structure(),
            statistics_file: default_statistics_file(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    let cli = Cli::parse();

    info!("Starting registry analytics v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    // Initialize Postgres client
    let client = PostgresClient::new(config.postgres.clone())
        .await
        .context("Failed to create Postgres client")?;

    // Initialize analytics schema
    if let Err(e) = postgres_client::schema::init_schema(&client).await {
        error!("Failed to initialize analytics schema: {}", e);
        // Continue anyway - schema might already exist
    }

    // Check connection before running any job
    if postgres_client::health::check_connection(&client).await {
        info!("Postgres connection: healthy");
    } else {
        anyhow::bail!("Postgres connection: unhealthy");
    }

    match cli.command {
        Command::Import { file } => {
            let file = file.unwrap_or_else(|| config.import.file.clone());
            run_import(&client, &file).await?;
        }
        Command::SyncLocationLevels => {
            sync_location_levels(&client, &config.locations.admin_structure).await?;
        }
        Command::SyncLocationStatistics => {
            let provider = FileStatisticsProvider::new(&config.locations.statistics_file);
            sync_location_statistics(&client, &provider).await?;
        }
    }

    metrics().log_summary();
    Ok(())
}

/// Import an events export file inside a single transaction.
async fn run_import(client: &PostgresClient, file: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read events file {}", file.display()))?;
    let events: Vec<EventDocument> =
        serde_json::from_str(&raw).context("Failed to parse events file")?;

    info!(count = events.len(), "Importing events");

    let registry = default_registry();

    let mut tx = client.begin().await?;
    import_events(&events, &registry, &mut *tx).await?;
    tx.commit()
        .await
        .context("Failed to commit import transaction")?;

    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("ANALYTICS")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // DATABASE_URL is the conventional override and wins over everything else
    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.postgres.url = url;
    }

    // Manual override for the statistics file path
    // The config crate's nested parsing doesn't work reliably with underscored field names
    if let Ok(path) = std::env::var("ANALYTICS_STATISTICS_FILE") {
        config.locations.statistics_file = PathBuf::from(path);
    }

    Ok(config)
}
