//! Config file loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TypeaheadError;

use super::Config;

/// Default config file location under the user's config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load configuration from the given path, or the default location
///
/// A missing file is not an error; defaults apply. An unreadable or
/// malformed file is reported, since the user explicitly wrote it.
pub fn load_config(path: Option<&Path>) -> Result<Config, TypeaheadError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| TypeaheadError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| TypeaheadError::ConfigParse { path, source })
}
