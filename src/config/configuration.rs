use std::env;
use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub snapshot_dir: String,
    pub output_dir: String,
    pub timeout_secs: u64,
    pub chunk_size: usize,
}

impl AppConfig {
    /// Snapshot directory with a leading `~` expanded to `$HOME`.
    pub fn snapshot_path(&self) -> PathBuf {
        expand_home(&self.snapshot_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_home(&self.output_dir)
    }
}

/// Loads the settings from the built-in defaults, an optional `Settings.toml`
/// and `APP_*` environment variables, in that order of precedence.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = default_settings()?
        .add_source(File::new("Settings.toml", FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

fn default_settings() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("snapshot_dir", "~/cuddlesmith-snapshot")?
        .set_default("output_dir", "images")?
        .set_default("timeout_secs", 30)?
        .set_default("chunk_size", 8192)
}

fn expand_home(path: &str) -> PathBuf {
    let home = env::var_os("HOME").map(PathBuf::from);

    match (path, home) {
        ("~", Some(home)) => home,
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
