use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::init::project_directory;

pub const DEFAULT_DATASET: &str = "./melodies.txt";
pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "MELODIES";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    /// The dataset used when `--dataset` is not given.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

impl Settings {
    /// Reads `config.toml` from the project config directory, then
    /// `MELODIES_*` environment variables on top of it.
    pub fn load() -> Result<Self> {
        let config_file = project_directory().map(|dirs| dirs.config_dir().join(CONFIG_FILE));
        Self::load_from(config_file.as_deref())
    }

    pub fn load_from(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// The `--dataset` argument wins over the configured dataset.
    pub fn dataset(&self, arg: Option<&Path>) -> PathBuf {
        arg.map(Path::to_path_buf)
            .or_else(|| self.dataset.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn argument_overrides_setting() {
        let settings = Settings {
            dataset: Some(PathBuf::from("configured.txt")),
        };
        assert_eq!(
            settings.dataset(Some(Path::new("arg.txt"))),
            PathBuf::from("arg.txt")
        );
        assert_eq!(settings.dataset(None), PathBuf::from("configured.txt"));
        assert_eq!(
            Settings::default().dataset(None),
            PathBuf::from(DEFAULT_DATASET)
        );
    }

    #[test]
    fn read_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "dataset = \"data/train.txt\"\n").unwrap();

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.dataset, Some(PathBuf::from("data/train.txt")));
    }

    #[test]
    fn missing_config_file_is_fine() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(Some(&dir.path().join(CONFIG_FILE))).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
