/// Persistence of the last used source folders and destination.
///
/// Stored as a small JSON document:
///
/// ```json
/// {
///   "source_folders": ["/photos/2023", "/photos/2024"],
///   "destination_folder": "/photos/all"
/// }
/// ```
///
/// Loading never fails: a missing or broken file yields defaults, and paths
/// that are no longer directories are dropped.
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// File name used when no explicit location is given.
pub const SETTINGS_FILE: &str = "settings.json";

/// Folders remembered between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub source_folders: Vec<PathBuf>,
    pub destination_folder: Option<PathBuf>,
}

/// On-disk shape. Kept separate so unknown or mistyped keys degrade to
/// defaults instead of failing the whole document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    source_folders: Vec<serde_json::Value>,
    #[serde(default)]
    destination_folder: serde_json::Value,
}

/// Reads and writes [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.json` in the current working directory.
    pub fn default_location() -> Self {
        Self::new(SETTINGS_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on any problem.
    pub fn load(&self) -> Settings {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "No {} found. Starting with default paths.",
                    self.path.display()
                );
                return Settings::default();
            }
            Err(err) => {
                error!("Error reading {}: {err}", self.path.display());
                return Settings::default();
            }
        };

        let file: SettingsFile = match serde_json::from_str(&text) {
            Ok(file) => file,
            Err(err) => {
                error!("Error reading {}: {err}", self.path.display());
                return Settings::default();
            }
        };

        let mut source_folders: Vec<PathBuf> = Vec::new();
        for value in file.source_folders {
            let Some(raw) = value.as_str() else {
                warn!("Ignoring non-string source folder entry: {value}");
                continue;
            };
            let path = PathBuf::from(raw);
            if path.is_dir() && !source_folders.contains(&path) {
                source_folders.push(path);
            }
        }

        let destination_folder = file
            .destination_folder
            .as_str()
            .map(PathBuf::from)
            .filter(|p| p.is_dir());

        info!("Settings loaded successfully.");
        Settings {
            source_folders,
            destination_folder,
        }
    }

    /// Write settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let file = SettingsFile {
            source_folders: settings
                .source_folders
                .iter()
                .map(|p| serde_json::Value::String(p.to_string_lossy().into_owned()))
                .collect(),
            destination_folder: serde_json::Value::String(
                settings
                    .destination_folder
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let io_err = |source: std::io::Error| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, json).map_err(io_err)?;

        info!("Settings saved successfully.");
        Ok(())
    }
}
