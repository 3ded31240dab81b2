//! # Configuration
//!
//! mynotes configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `MYNOTES_DATA_DIR`, `MYNOTES_STORE_FILE`.
//! 2. **Config file**: `mynotes.toml` in the OS config directory (via the
//!    `directories` crate), or an explicit path.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Directory holding the notes file |
//! | `store_file` | `notes.json` | Name of the notes file inside `data_dir` |
//! | `default_title` | `New note` | Title given to newly created notes |
//! | `confirm_delete` | `true` | Ask before deleting a note |

use crate::error::{NotesError, Result};
use crate::model::DEFAULT_TITLE;
use crate::store::fs_backend::DEFAULT_STORE_FILE;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "mynotes.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "mynotes")
}

/// Location of the config file when none is given explicitly.
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(CONFIG_FILE_NAME))
}

/// Configuration for mynotes, stored in `mynotes.toml`.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Directory holding the notes file. Defaults to the OS data directory.
    #[config(env = "MYNOTES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// File name of the stored collection.
    #[config(env = "MYNOTES_STORE_FILE", default = "notes.json")]
    pub store_file: String,

    /// Title given to notes created with `create`.
    #[config(default = "New note")]
    pub default_title: String,

    /// Ask for confirmation before deleting a note.
    #[config(default = true)]
    pub confirm_delete: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: DEFAULT_STORE_FILE.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            confirm_delete: true,
        }
    }
}

impl NotesConfig {
    /// Load from the environment and `config_file` (or the default config file).
    /// A missing file is not an error.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file.map(Path::to_path_buf).or_else(default_config_file) {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| NotesError::Config(e.to_string()))
    }

    /// Resolve the data directory, falling back to the OS data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| project_dirs().map(|d| d.data_dir().to_path_buf()))
            .ok_or_else(|| NotesError::Config("could not determine a data directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = NotesConfig::default();
        assert_eq!(config.store_file, "notes.json");
        assert_eq!(config.default_title, "New note");
        assert!(config.confirm_delete);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = NotesConfig {
            data_dir: Some(PathBuf::from("/tmp/notes")),
            ..Default::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/notes"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "default_title = \"Untitled\"\nconfirm_delete = false\n",
        )
        .unwrap();

        let config = NotesConfig::load(Some(&path)).unwrap();
        assert_eq!(config.default_title, "Untitled");
        assert!(!config.confirm_delete);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NotesConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.default_title, "New note");
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "confirm_delete = \"maybe\"\n").unwrap();

        let err = NotesConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, NotesError::Config(_)));
    }
}
