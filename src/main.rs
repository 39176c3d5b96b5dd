use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, SteamGridDbClient};
use crate::services::AssetService;
use tracing::{debug, info};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file may provide STEAMGRIDDB_API_KEY.
    dotenvy::dotenv().ok();

    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_max_level(config.args.log_level)
        .init();
    debug!("Resolved library paths: {:?}", config.paths);

    let catalog = SteamGridDbClient::new(config.http_client.clone(), config.args.api_key.clone());
    let service = AssetService::new(
        catalog,
        FileSystemStore::from_paths(&config.paths),
        config.paths.database.clone(),
        config.args.target,
        config.args.resize,
    );

    service.process().await?;

    info!("Done");
    Ok(())
}
