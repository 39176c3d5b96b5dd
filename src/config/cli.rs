use crate::domain::{ResizeMode, Target};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Fetch missing Lutris cover art, banners and icons from SteamGridDB
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    disable_version_flag = true,
    max_term_width = 96
)]
pub struct Args {
    /// SteamGridDB API key
    #[arg(short = 'k', long, env = "STEAMGRIDDB_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Lutris uses a different aspect ratio than SteamGridDB. Specify whether
    /// the new assets should be stretched or cropped to fill
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = ResizeMode::Stretch)]
    pub resize: ResizeMode,

    /// The assets to be updated
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = Target::All)]
    pub target: Target,

    /// Path to the directory containing coverart, banners, and pga.db
    #[arg(short, long, default_value = "~/.local/share/lutris")]
    pub lutris_path: PathBuf,

    /// Path to the directory containing the game icons
    #[arg(short, long, default_value = "~/.local/share/icons/hicolor/128x128/apps")]
    pub icon_path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}
