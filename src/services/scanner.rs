use crate::domain::AssetKind;
use crate::infrastructure::FileSystemStore;
use tracing::debug;

/// Slugs lacking an asset file, grouped per requested kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MissingAssets {
    entries: Vec<(AssetKind, Vec<String>)>,
}

impl MissingAssets {
    pub fn get(&self, kind: AssetKind) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, slugs)| slugs.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, slugs)| slugs.is_empty())
    }
}

pub struct MissingAssetScanner<'a> {
    store: &'a FileSystemStore,
}

impl<'a> MissingAssetScanner<'a> {
    pub fn new(store: &'a FileSystemStore) -> Self {
        Self { store }
    }

    /// A missing directory simply makes every slug missing.
    pub fn scan(&self, slugs: &[String], kinds: &[AssetKind]) -> MissingAssets {
        let entries = kinds
            .iter()
            .map(|&kind| {
                let missing: Vec<String> = slugs
                    .iter()
                    .filter(|slug| !self.store.has_asset(kind, slug))
                    .cloned()
                    .collect();
                debug!("{} of {} games are missing a {}", missing.len(), slugs.len(), kind);
                (kind, missing)
            })
            .collect();

        MissingAssets { entries }
    }
}
