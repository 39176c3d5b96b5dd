use crate::domain::{Catalog, ResizeMode, Target};
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, LibraryDb};
use crate::services::fetch::FetchOrchestrator;
use crate::services::scanner::{MissingAssetScanner, MissingAssets};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub struct AssetService<C: Catalog> {
    catalog: C,
    store: FileSystemStore,
    database: PathBuf,
    target: Target,
    resize: ResizeMode,
}

impl<C: Catalog> AssetService<C> {
    pub fn new(
        catalog: C,
        store: FileSystemStore,
        database: impl Into<PathBuf>,
        target: Target,
        resize: ResizeMode,
    ) -> Self {
        Self {
            catalog,
            store,
            database: database.into(),
            target,
            resize,
        }
    }

    /// Scans the library and fetches whatever is missing.
    ///
    /// A library that cannot be read is logged and ends the run early, before
    /// any network traffic. Errors while fetching are returned.
    pub async fn process(&self) -> Result<()> {
        info!("Scanning Lutris library at {:?}", self.database);

        let missing = match self.find_missing() {
            Ok(missing) => missing,
            Err(e) => {
                error!("{}", e);
                return Ok(());
            }
        };

        if missing.is_empty() {
            info!("No missing {} found.", self.target.noun());
        }

        let orchestrator = FetchOrchestrator::new(&self.catalog, &self.store, self.resize);
        for &kind in self.target.kinds() {
            let slugs = missing.get(kind);
            if slugs.is_empty() {
                continue;
            }

            let summary = orchestrator.fetch_all(kind, slugs).await?;
            match &summary.aborted_at {
                Some(slug) => warn!(
                    "Stopped fetching {}s at \"{}\": {} updated, {} unavailable",
                    kind, slug, summary.updated, summary.unavailable
                ),
                None => info!(
                    "Fetched {}s: {} updated, {} unavailable",
                    kind, summary.updated, summary.unavailable
                ),
            }
        }

        Ok(())
    }

    fn find_missing(&self) -> Result<MissingAssets> {
        let slugs = LibraryDb::open(&self.database)?.slugs()?;
        Ok(MissingAssetScanner::new(&self.store).scan(&slugs, self.target.kinds()))
    }
}
