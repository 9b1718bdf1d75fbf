use std::{
    fs,
    path::{Path, PathBuf},
};

use devfinder_lib::{DisplayMode, Error, Result, fs::config_dir};
use serde::{Deserialize, Serialize};
use tracing::warn;

const FILE_NAME: &str = "gui.toml";

/// The front end's configuration, serialized to TOML.
///
/// Only read at startup. Toggling the display mode while running never writes it back.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Display mode the window opens in.
    pub initial_mode: DisplayMode,
}

impl GuiConfig {
    /// Load from the devfinder configuration directory, falling back to the defaults when that
    /// isn't possible.
    pub fn load() -> Self {
        match config_dir().and_then(|dir| Self::load_from(&dir.join(FILE_NAME))) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Using default GUI configuration: {err}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
            Ok(toml::from_str(&contents)?)
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents).map_err(|source| io_error(path, source))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults_written_on_first_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = GuiConfig::load_from(&path).unwrap();

        assert_eq!(cfg.initial_mode, DisplayMode::Light);
        assert_eq!(
            fs::read_to_string(&path).unwrap().trim(),
            "initial_mode = \"light\""
        );
    }

    #[test]
    fn test_dark_start() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "initial_mode = \"dark\"\n").unwrap();

        assert_eq!(
            GuiConfig::load_from(&path).unwrap().initial_mode,
            DisplayMode::Dark
        );
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "initial_mode = \"sepia\"\n").unwrap();

        assert!(matches!(
            GuiConfig::load_from(&path),
            Err(Error::ConfigParse(_))
        ));
    }
}
