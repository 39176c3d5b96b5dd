use super::{composer, geometry};
use crate::domain::{AssetKind, Catalog, CatalogGame, ImageQuery, ResizeMode};
use crate::error::{CoverupError, Result};
use crate::infrastructure::FileSystemStore;
use image::{DynamicImage, ImageFormat};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Cursor;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of one batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub updated: usize,
    pub unavailable: usize,
    /// Slug whose failed search stopped the batch.
    pub aborted_at: Option<String>,
}

pub struct FetchOrchestrator<'a, C: Catalog> {
    catalog: &'a C,
    store: &'a FileSystemStore,
    resize: ResizeMode,
}

impl<'a, C: Catalog> FetchOrchestrator<'a, C> {
    pub fn new(catalog: &'a C, store: &'a FileSystemStore, resize: ResizeMode) -> Self {
        Self {
            catalog,
            store,
            resize,
        }
    }

    /// Fetches `kind` for every slug in order.
    ///
    /// A game the catalog cannot find stops the rest of the batch, while a game
    /// with no images of this kind is only skipped. Any other failure is
    /// returned straight away.
    pub async fn fetch_all(&self, kind: AssetKind, slugs: &[String]) -> Result<FetchSummary> {
        let mut summary = FetchSummary::default();
        if slugs.is_empty() {
            return Ok(summary);
        }

        let pb = ProgressBar::new(slugs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| CoverupError::Other(e.to_string()))?,
        );

        for slug in slugs {
            pb.set_message(format!("{kind}: {slug}"));

            let Some(game) = self
                .catalog
                .search(slug)
                .await?
                .into_iter()
                .next()
            else {
                warn!("Unable to find {} on SteamGridDB", slug);
                summary.aborted_at = Some(slug.clone());
                break;
            };

            if self.fetch_one(kind, slug, &game).await? {
                info!("Successfully updated {} for \"{}\"", kind, game.name);
                summary.updated += 1;
            } else {
                summary.unavailable += 1;
            }
            pb.inc(1);
        }

        pb.finish_with_message(format!(
            "{} {}s updated, {} unavailable",
            summary.updated, kind, summary.unavailable
        ));
        Ok(summary)
    }

    /// Returns `false` when the catalog has no image of this kind for the game.
    async fn fetch_one(&self, kind: AssetKind, slug: &str, game: &CatalogGame) -> Result<bool> {
        let images = self
            .catalog
            .images(game.id, &ImageQuery::for_asset(kind))
            .await?;
        let Some(resource) = images.first() else {
            warn!("No {}s available for \"{}\"", kind, game.name);
            return Ok(false);
        };

        let bytes = self.catalog.download(&resource.url).await?;
        let path = self.store.asset_path(kind, slug);
        self.store.write_asset(&path, &bytes)?;

        let mut image = image::load_from_memory(&bytes)?;
        if kind == AssetKind::Banner {
            image = self.decorate_banner(game, image).await?;
        }
        let image = geometry::apply(kind, self.resize, image);

        self.store.write_asset(&path, &encode_for(&path, &image)?)?;
        Ok(true)
    }

    /// Overlays the game's logo. Without one the hero is used as is.
    async fn decorate_banner(&self, game: &CatalogGame, hero: DynamicImage) -> Result<DynamicImage> {
        let logos = self.catalog.images(game.id, &ImageQuery::logos()).await?;
        let Some(logo) = logos.first() else {
            warn!("No logos available for \"{}\"", game.name);
            return Ok(hero);
        };

        let bytes = self.catalog.download(&logo.url).await?;
        let logo = image::load_from_memory(&bytes)?;
        Ok(composer::overlay_logo(hero, logo))
    }
}

/// Encodes in the format implied by the file extension.
fn encode_for(path: &Path, image: &DynamicImage) -> Result<Vec<u8>> {
    let format = ImageFormat::from_path(path)?;
    let mut buf = Cursor::new(Vec::new());

    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut buf, format)?,
        _ => image.write_to(&mut buf, format)?,
    }

    Ok(buf.into_inner())
}
