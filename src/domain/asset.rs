use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

pub const COVER_WIDTH: u32 = 264;
pub const COVER_HEIGHT: u32 = 352;
pub const COVER_CROP_MARGIN: u32 = 50;

pub const BANNER_WIDTH: u32 = 184;
pub const BANNER_HEIGHT: u32 = 69;

/// Icons are square.
pub const ICON_SIZE: u32 = 128;

/// One class of per-game image that Lutris displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Cover,
    Banner,
    Icon,
}

/// Rectangle in source pixels, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Cover => "cover",
            AssetKind::Banner => "banner",
            AssetKind::Icon => "icon",
        }
    }

    /// Width and height the saved asset is scaled to. For icons this is a
    /// bounding box rather than an exact size.
    pub fn target_size(self) -> (u32, u32) {
        match self {
            AssetKind::Cover => (COVER_WIDTH, COVER_HEIGHT),
            AssetKind::Banner => (BANNER_WIDTH, BANNER_HEIGHT),
            AssetKind::Icon => (ICON_SIZE, ICON_SIZE),
        }
    }

    /// Source resolution the crop box was measured against.
    pub fn canonical_source_size(self) -> Option<(u32, u32)> {
        match self {
            AssetKind::Cover => Some((600, 900)),
            AssetKind::Banner => Some((1920, 620)),
            AssetKind::Icon => None,
        }
    }

    pub fn crop_box(self) -> Option<CropBox> {
        match self {
            AssetKind::Cover => Some(CropBox {
                left: 0,
                top: COVER_CROP_MARGIN,
                right: 600,
                bottom: 900 - COVER_CROP_MARGIN,
            }),
            AssetKind::Banner => Some(CropBox {
                left: 133,
                top: 0,
                right: 1786,
                bottom: 620,
            }),
            AssetKind::Icon => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Cover | AssetKind::Banner => "jpg",
            AssetKind::Icon => "png",
        }
    }

    /// Canonical location of the asset for `slug` inside `dir`.
    pub fn file_path(self, dir: &Path, slug: &str) -> PathBuf {
        let name = match self {
            AssetKind::Icon => format!("lutris_{slug}.{}", self.extension()),
            AssetKind::Cover | AssetKind::Banner => format!("{slug}.{}", self.extension()),
        };
        dir.join(name)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Policy for fitting a fetched image to the fixed Lutris dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResizeMode {
    None,
    Stretch,
    Crop,
}

/// Which assets a run should update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    All,
    Covers,
    Banners,
    Icons,
}

impl Target {
    pub fn kinds(self) -> &'static [AssetKind] {
        match self {
            Target::All => &[AssetKind::Cover, AssetKind::Banner, AssetKind::Icon],
            Target::Covers => &[AssetKind::Cover],
            Target::Banners => &[AssetKind::Banner],
            Target::Icons => &[AssetKind::Icon],
        }
    }

    /// Noun used in "No missing ... found." messages.
    pub fn noun(self) -> &'static str {
        match self {
            Target::All => "assets",
            Target::Covers => "covers",
            Target::Banners => "banners",
            Target::Icons => "icons",
        }
    }
}
