use super::{Config, InputConfig, LibraryConfig, LogConfig, PathsConfig, Theme};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const THEME: &str = "mono";
pub const LOG_LEVEL: &str = "info";

pub fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "shelf", "shelf")
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("shelf"))
}

pub fn defaults() -> Config {
    Config {
        theme: Theme::default(),
        input: InputConfig::default(),
        paths: PathsConfig::default(),
        library: LibraryConfig::default(),
        log: LogConfig::default(),
    }
}
