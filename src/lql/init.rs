use crate::api::LqlApi;
use crate::config::LqlConfig;
use crate::error::{LqlError, Result};
use crate::paths::StoragePaths;
use crate::store::fs::FileStore;
use directories::BaseDirs;
use std::path::PathBuf;

/// Overrides the home directory the store lives under.
pub const HOME_ENV: &str = "LQL_HOME";

pub struct LqlContext {
    pub api: LqlApi<FileStore>,
    pub config: LqlConfig,
}

/// The home directory: `$LQL_HOME` when set and non-empty, otherwise the
/// current user's home.
pub fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| LqlError::Store("Could not determine home directory".to_string()))
}

pub fn initialize(home: PathBuf) -> Result<LqlContext> {
    let paths = StoragePaths::new(home);
    let config = LqlConfig::load(paths.root_path())?;
    log::debug!("store root is {}", paths.root_path().display());

    let store = FileStore::new(paths.clone());
    let api = LqlApi::new(store, paths);

    Ok(LqlContext { api, config })
}
