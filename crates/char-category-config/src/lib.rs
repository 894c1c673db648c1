use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read char-category config {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid char-category config {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from a `char-category` TOML file.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Character definition file to load. The bundled `char.def` is used
    /// when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_def: Option<PathBuf>,
}

impl Config {
    /// Reads the config at `config_path`. A missing file is `Ok(None)`.
    ///
    /// `char_def` goes through `~` and `$VAR` expansion, then a relative
    /// result is anchored at the config file's directory.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::Unreadable {
                path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: config_path.to_path_buf(),
            source,
        })?;

        let base_dir = config_path.parent().unwrap_or(Path::new(""));
        config.char_def = config
            .char_def
            .map(|def| resolve_char_def(&def, base_dir));

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Unexpandable paths (an unset `$VAR`) are kept as written so the load
/// error later names what the user typed.
fn resolve_char_def(def: &Path, base_dir: &Path) -> PathBuf {
    let def = expand(def).unwrap_or_else(|| def.to_path_buf());
    if def.is_relative() {
        base_dir.join(def)
    } else {
        def
    }
}

fn expand(path: &Path) -> Option<PathBuf> {
    shellexpand::full(&path.to_string_lossy())
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}
