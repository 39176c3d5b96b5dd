use super::AssetKind;
use crate::error::Result;
use serde::Deserialize;

/// A game entry returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogGame {
    pub id: u64,
    pub name: String,
}

/// A downloadable image resource. Grids, heroes, logos and icons share it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogImage {
    pub id: u64,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageResource {
    Grid,
    Hero,
    Logo,
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStyle {
    Alternate,
}

impl ImageStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageStyle::Alternate => "alternate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Jpeg,
}

impl MimeType {
    pub fn as_str(self) -> &'static str {
        match self {
            MimeType::Jpeg => "image/jpeg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageQuery {
    pub resource: ImageResource,
    pub styles: Vec<ImageStyle>,
    pub mimes: Vec<MimeType>,
}

impl ImageQuery {
    pub fn for_asset(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Cover => Self {
                resource: ImageResource::Grid,
                styles: Vec::new(),
                mimes: vec![MimeType::Jpeg],
            },
            AssetKind::Banner => Self {
                resource: ImageResource::Hero,
                styles: vec![ImageStyle::Alternate],
                mimes: vec![MimeType::Jpeg],
            },
            AssetKind::Icon => Self {
                resource: ImageResource::Icon,
                styles: Vec::new(),
                mimes: Vec::new(),
            },
        }
    }

    pub fn logos() -> Self {
        Self {
            resource: ImageResource::Logo,
            styles: Vec::new(),
            mimes: Vec::new(),
        }
    }
}

/// Remote artwork catalog: search, list images for a game, fetch bytes.
pub trait Catalog {
    async fn search(&self, term: &str) -> Result<Vec<CatalogGame>>;

    async fn images(&self, game_id: u64, query: &ImageQuery) -> Result<Vec<CatalogImage>>;

    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}
