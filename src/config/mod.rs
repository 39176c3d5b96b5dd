use crate::config::cli::Args;
use crate::error::{CoverupError, Result};
use clap::Parser;
use directories::BaseDirs;
use reqwest::Client;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

pub(crate) mod cli;

const COVER_ART_DIR: &str = "coverart";
const BANNER_DIR: &str = "banners";
const DATABASE_FILE: &str = "pga.db";

/// Absolute locations of everything the run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    pub cover_dir: PathBuf,
    pub banner_dir: PathBuf,
    pub icon_dir: PathBuf,
    pub database: PathBuf,
}

impl LibraryPaths {
    pub fn resolve(lutris_path: &Path, icon_path: &Path) -> Result<Self> {
        let lutris_dir = absolutize(&expand_home(lutris_path)?)?;
        let icon_dir = absolutize(&expand_home(icon_path)?)?;

        Ok(Self {
            cover_dir: lutris_dir.join(COVER_ART_DIR),
            banner_dir: lutris_dir.join(BANNER_DIR),
            database: lutris_dir.join(DATABASE_FILE),
            icon_dir,
        })
    }
}

pub struct Config {
    pub args: Args,
    pub paths: LibraryPaths,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();
        let paths = LibraryPaths::resolve(&args.lutris_path, &args.icon_path)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("lutris-coverup/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            args,
            paths,
            http_client,
        })
    }
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let base = BaseDirs::new()
                .ok_or_else(|| CoverupError::Other("Cannot determine home directory".into()))?;
            Ok(base.home_dir().join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
