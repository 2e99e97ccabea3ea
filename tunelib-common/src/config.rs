//! Configuration loading and root folder resolution

use std::path::{Path, PathBuf};

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "TUNELIB_ROOT";

/// Resolve the root folder in priority order:
/// 1. Command-line argument (highest priority)
/// 2. `TUNELIB_ROOT` environment variable
/// 3. `root_folder` key in the platform config file (`<config dir>/tunelib/config.toml`)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        return PathBuf::from(path);
    }

    if let Some(path) = root_folder_from_config_file() {
        return path;
    }

    default_root_folder()
}

fn root_folder_from_config_file() -> Option<PathBuf> {
    let config_path = dirs::config_dir()?.join("tunelib").join("config.toml");
    let contents = std::fs::read_to_string(config_path).ok()?;
    let config = toml::from_str::<toml::Value>(&contents).ok()?;
    config
        .get("root_folder")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
}

fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("tunelib"))
        .unwrap_or_else(|| PathBuf::from("./tunelib_data"))
}

/// Path of the catalog database inside the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join("tunelib.db")
}

/// Directory holding uploaded audio files inside the root folder
pub fn files_dir(root: &Path) -> PathBuf {
    root.join("files")
}
