//! Configuration file loading for quadhash.
//!
//! User config location: $XDG_CONFIG_HOME/quadhash/quadhash.toml
//! Fallback: the platform config directory (~/.config/quadhash/quadhash.toml on Linux)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::settings::OptionsLayer;
use crate::error::{DigestError, DigestResult};

const CONFIG_DIR_NAME: &str = "quadhash";
const CONFIG_FILE_NAME: &str = "quadhash.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/quadhash/quadhash.toml
/// 2. Otherwise: `dirs::config_dir()`/quadhash/quadhash.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load one options layer from a TOML file.
///
/// A missing file is not an error and yields `Ok(None)`.
pub fn load_options_file(path: &Path) -> DigestResult<Option<OptionsLayer>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!(
                target: "quadhash::config",
                "No config file at {}",
                path.display()
            );
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let layer = toml::from_str::<OptionsLayer>(&contents).map_err(|err| {
        DigestError::config(format!("failed to parse {}: {}", path.display(), err))
    })?;
    log::debug!(
        target: "quadhash::config",
        "Loaded config from {}: {:?}",
        path.display(),
        layer
    );
    Ok(Some(layer))
}

/// Load the user-wide options layer, if one exists.
pub fn load_user_options() -> DigestResult<Option<OptionsLayer>> {
    match user_config_path() {
        Some(path) => load_options_file(&path),
        None => Ok(None),
    }
}
