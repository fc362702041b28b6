use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub library: LibraryConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// `mono` (dark) or `paper` (light).
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    /// Relative cover paths are resolved against this directory.
    pub covers_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Seed the library with sample books on startup.
    pub sample_books: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        defaults::defaults()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: defaults::THEME.to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = defaults::data_dir();
        Self {
            covers_dir: data_dir.join("covers"),
            data_dir,
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self { sample_books: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
        }
    }
}

impl LogConfig {
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl PathsConfig {
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("shelf.log")
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    write_private(&path, &raw)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "shelf", "shelf").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        save(&cfg, Some(&path)).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse(&raw).with_context(|| format!("parse {}", path.display()))
}

fn parse(raw: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str::<Config>(raw)?)
}

fn write_private(path: &Path, raw: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg = parse("[theme]\nname = \"paper\"\n").unwrap();
        assert_eq!(cfg.theme.name, "paper");
        assert!(cfg.input.mouse);
        assert!(cfg.library.sample_books);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_round_trip() {
        let mut cfg = Config::default();
        cfg.library.sample_books = false;
        cfg.paths.covers_dir = PathBuf::from("/tmp/covers");
        let raw = toml::to_string_pretty(&cfg).unwrap();
        let back = parse(&raw).unwrap();
        assert!(!back.library.sample_books);
        assert_eq!(back.paths.covers_dir, PathBuf::from("/tmp/covers"));
    }

    #[test]
    fn test_log_level() {
        let mut log = LogConfig::default();
        assert_eq!(log.max_level(), tracing::Level::INFO);
        log.level = "debug".into();
        assert_eq!(log.max_level(), tracing::Level::DEBUG);
        log.level = "loud".into();
        assert_eq!(log.max_level(), tracing::Level::INFO);
    }
}
