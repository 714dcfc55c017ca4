//! Runtime configuration.
//!
//! The target directory comes from, in order: the `--path` option, the
//! `CSV_EXTEND_DIR` environment variable (a `.env` file is honoured), then
//! [`DEFAULT_DIR`]. A candidate that cannot be listed is reported and the
//! next source is tried.

use std::env;
use std::path::{Path, PathBuf};

use crate::logs::log_warning;

/// Directory converted when nothing else is configured (relative to current dir)
pub const DEFAULT_DIR: &str = "./csv";

/// Environment variable overriding [`DEFAULT_DIR`]
pub const DIR_ENV_VAR: &str = "CSV_EXTEND_DIR";

/// Substring marking a file as tabular input
pub const SOURCE_MARKER: &str = ".csv";

/// Suffix of converted files; names containing it are never reconverted
pub const OUTPUT_SUFFIX: &str = "_extended.csv";

/// Load a `.env` file from the current directory or its parents, if any.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Return `path` if it is a directory that can be listed.
///
/// Otherwise prints `Invalid path <path>.` and returns `None`.
pub fn validate_path(path: &Path) -> Option<PathBuf> {
    match std::fs::read_dir(path) {
        Ok(_) => Some(path.to_path_buf()),
        Err(_) => {
            log_warning(format!("Invalid path {}.", path.display()));
            None
        }
    }
}

/// Pick the directory to convert.
pub fn resolve_dir(cli_path: Option<&Path>) -> PathBuf {
    let env_path = env::var_os(DIR_ENV_VAR).map(PathBuf::from);
    resolve_dir_from(cli_path, env_path.as_deref())
}

fn resolve_dir_from(cli_path: Option<&Path>, env_path: Option<&Path>) -> PathBuf {
    cli_path
        .and_then(validate_path)
        .or_else(|| env_path.and_then(validate_path))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(validate_path(dir.path()), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_validate_rejects_missing_and_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.csv");
        std::fs::write(&file, "x").unwrap();

        assert_eq!(validate_path(&dir.path().join("nope")), None);
        assert_eq!(validate_path(&file), None);
    }

    #[test]
    fn test_resolve_prefers_cli_path() {
        let cli = TempDir::new().unwrap();
        let env_dir = TempDir::new().unwrap();

        assert_eq!(
            resolve_dir_from(Some(cli.path()), Some(env_dir.path())),
            cli.path().to_path_buf()
        );
    }

    #[test]
    fn test_resolve_falls_back_to_env_then_default() {
        let env_dir = TempDir::new().unwrap();
        let missing = env_dir.path().join("missing");

        assert_eq!(
            resolve_dir_from(Some(&missing), Some(env_dir.path())),
            env_dir.path().to_path_buf()
        );
        assert_eq!(
            resolve_dir_from(Some(&missing), Some(&missing)),
            PathBuf::from(DEFAULT_DIR)
        );
        assert_eq!(resolve_dir_from(None, None), PathBuf::from(DEFAULT_DIR));
    }
}
