//! Centralized path definitions
//!
//! ## Configuration lookup
//!
//! ```text
//! ./.applic.toml                 # Project config, next to the modules
//! <config dir>/applic/
//! └── config.toml               # User config (XDG on Linux)
//! ```
//!
//! An explicit `--config` path replaces both.

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".applic.toml";

/// Directory under the user config dir
const USER_DIR: &str = "applic";

/// User configuration filename
const USER_CONFIG_FILE: &str = "config.toml";

/// Path to the project config in `dir`.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Path to the user config, if the platform has a config directory.
#[must_use]
pub fn user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_DIR).join(USER_CONFIG_FILE))
}

/// Candidate config files for `dir`, most specific first.
#[must_use]
pub fn config_candidates(dir: &Path) -> Vec<PathBuf> {
    std::iter::once(project_config(dir)).chain(user_config()).collect()
}

/// Output path for `source` written into directory `out_dir`.
///
/// Keeps the source file name; stdin is written as `stdin.xml`.
#[must_use]
pub fn output_in(out_dir: &Path, source: Option<&Path>) -> PathBuf {
    let name = source
        .and_then(Path::file_name)
        .map_or_else(|| "stdin.xml".into(), ToOwned::to_owned);
    out_dir.join(name)
}
