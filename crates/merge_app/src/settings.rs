use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use merge_engine::ServiceSettings;
use merge_logging::{merge_info, merge_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub service: ServiceSettings,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Loads settings from a RON file. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<AppSettings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            merge_warn!("Settings file {:?} not found; using defaults", path);
            return Ok(AppSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let settings: AppSettings = ron::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    merge_info!(
        "Loaded settings from {:?} (service at {})",
        path,
        settings.service.base_url
    );
    Ok(settings)
}
