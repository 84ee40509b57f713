use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from graylab.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory holding the course image set
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults on any problem.
    ///
    /// Resolution order: an explicit path (e.g. from `--config`), then the
    /// `GRAYLAB_CONFIG` env var, then `./graylab.yaml` if present. After
    /// parsing, `IMAGES_DIR` overrides the image directory when set.
    pub fn load(path: Option<&Path>) -> Self {
        let candidate = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("GRAYLAB_CONFIG").ok().map(PathBuf::from))
            .or_else(|| {
                let default = PathBuf::from("graylab.yaml");
                default.exists().then_some(default)
            });

        let mut config = match candidate {
            Some(file) => match std::fs::read_to_string(&file) {
                Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                    Ok(config) => {
                        tracing::info!(config = %file.display(), "Loaded configuration");
                        config
                    }
                    Err(e) => {
                        tracing::warn!(%e, "Failed to parse config, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(%e, "Failed to read config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var("IMAGES_DIR") {
            config.images_dir = PathBuf::from(dir);
        }

        config
    }
}
