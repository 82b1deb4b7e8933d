use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding additional config files, separated by `:`.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

/// Loads the default config, overridden by the files listed in
/// [`CONFIG_PATHS_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(extra) = std::env::var(CONFIG_PATHS_ENV) {
        paths.extend(
            extra
                .split(':')
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        );
    }
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub image: ImageConfig,
    pub moderation: ModerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub capacity: usize,
}

#[derive(Debug, Deserialize)]
pub struct ImageConfig {
    pub max_width: u32,
    pub quality: u8,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ModerationConfig {
    pub passphrase: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.image.max_width, 800);
        assert_eq!(config.image.quality, 70);
        assert_eq!(config.store.capacity, 5 * 1024 * 1024);
    }

    #[test]
    fn later_files_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(&path, "[store]\ncapacity = 1024\n\n[image]\ntimeout = \"1m 30s\"\n").unwrap();

        let config = load_paths(&[PathBuf::from(DEFAULT_CONFIG_PATH), path]).unwrap();

        assert_eq!(config.store.capacity, 1024);
        assert_eq!(config.store.path, PathBuf::from("data/store.json"));
        assert_eq!(*config.image.timeout, std::time::Duration::from_secs(90));
        assert_eq!(config.moderation.passphrase, "portfolioAdmin123");
    }
}
