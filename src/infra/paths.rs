// src/infra/paths.rs — Path management
//
// All paths respect the TUTOR_HOME environment variable for isolation.
// When TUTOR_HOME is set, config and cached state live under that
// directory. When unset, config uses ~/.tutor/.

use directories::BaseDirs;
use std::path::PathBuf;

/// Returns the TUTOR_HOME override, if set.
fn tutor_home() -> Option<PathBuf> {
    std::env::var_os("TUTOR_HOME").map(PathBuf::from)
}

/// Configuration directory: $TUTOR_HOME/ or ~/.tutor/
pub fn config_dir() -> PathBuf {
    if let Some(home) = tutor_home() {
        return home;
    }
    dirs_home().join(".tutor")
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Ensure required directories exist
pub fn ensure_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(config_dir())
}
