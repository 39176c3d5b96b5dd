mod asset;
pub(crate) mod catalog;

pub use asset::{AssetKind, ResizeMode, Target};
pub use catalog::{Catalog, CatalogGame, CatalogImage, ImageQuery, ImageResource};
