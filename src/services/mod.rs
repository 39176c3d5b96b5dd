pub(crate) mod asset_service;
pub(crate) mod composer;
pub(crate) mod fetch;
pub(crate) mod geometry;
pub(crate) mod scanner;

#[cfg(test)]
pub(crate) mod test_support;

pub use asset_service::AssetService;
