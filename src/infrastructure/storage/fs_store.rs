use crate::config::LibraryPaths;
use crate::domain::AssetKind;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Asset directories on disk. Existence of a file is the only state kept.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    cover_dir: PathBuf,
    banner_dir: PathBuf,
    icon_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(
        cover_dir: impl Into<PathBuf>,
        banner_dir: impl Into<PathBuf>,
        icon_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cover_dir: cover_dir.into(),
            banner_dir: banner_dir.into(),
            icon_dir: icon_dir.into(),
        }
    }

    pub fn from_paths(paths: &LibraryPaths) -> Self {
        Self::new(&paths.cover_dir, &paths.banner_dir, &paths.icon_dir)
    }

    fn dir_for(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Cover => &self.cover_dir,
            AssetKind::Banner => &self.banner_dir,
            AssetKind::Icon => &self.icon_dir,
        }
    }

    pub fn asset_path(&self, kind: AssetKind, slug: &str) -> PathBuf {
        kind.file_path(self.dir_for(kind), slug)
    }

    pub fn has_asset(&self, kind: AssetKind, slug: &str) -> bool {
        self.asset_path(kind, slug).is_file()
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Overwrites the file at `path` with `data`.
    pub fn write_asset(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}
