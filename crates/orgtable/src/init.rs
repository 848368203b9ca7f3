//! # Context Bootstrap
//!
//! [`initialize`] wires the production collaborators together: it resolves the data
//! directory, loads [`OrgTableConfig`], picks a fetch source and builds an
//! [`OrgTableApi`] whose initial [`ViewState`] reflects the configured defaults.
//!
//! ## Data Directory
//!
//! 1. `ORGTABLE_DATA` environment variable, if set (primarily for testing).
//! 2. Otherwise the OS-appropriate data directory (via the `directories` crate).
//!
//! The snapshot lives at `<data dir>/snapshot.json` and the global config at
//! `<data dir>/orgtable.toml`. An `orgtable.toml` in the working directory overrides the
//! global one key by key.
//!
//! ## Source Selection
//!
//! With [`InitOptions::from_file`] set, records are read from that JSON file instead of
//! the configured HTTP endpoint.

use crate::api::OrgTableApi;
use crate::config::OrgTableConfig;
use crate::error::{OrgTableError, Result};
use crate::model::Record;
use crate::source::file::FileSource;
use crate::source::http::HttpSource;
use crate::source::RecordSource;
use crate::store::fs_backend::FsSnapshot;
use crate::store::RecordStore;
use crate::view::ViewState;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "ORGTABLE_DATA";
pub const CONFIG_FILE: &str = "orgtable.toml";

/// The fetch source picked at start-up.
pub enum ConfiguredSource {
    Http(HttpSource),
    File(FileSource),
}

impl RecordSource for ConfiguredSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        match self {
            ConfiguredSource::Http(source) => source.fetch(),
            ConfiguredSource::File(source) => source.fetch(),
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Http(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Directory whose `orgtable.toml` overrides the global config.
    pub project_dir: Option<PathBuf>,
    /// Read records from this JSON file instead of the endpoint.
    pub from_file: Option<PathBuf>,
}

pub struct OrgTableContext {
    pub api: OrgTableApi<ConfiguredSource, FsSnapshot>,
    pub config: OrgTableConfig,
    pub data_dir: PathBuf,
}

/// Resolve the data directory: `ORGTABLE_DATA`, else the OS data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "orgtable", "orgtable")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| OrgTableError::Config("Could not determine data directory".to_string()))
}

/// Config search paths, lowest priority first.
pub fn config_search_paths(data_dir: &Path, project_dir: Option<&Path>) -> Vec<SearchPath> {
    let mut paths = vec![SearchPath::Path(data_dir.to_path_buf())];
    if let Some(dir) = project_dir {
        paths.push(SearchPath::Path(dir.to_path_buf()));
    }
    paths
}

/// Load config from the given directories. Missing or invalid files fall back to defaults.
pub fn load_config(data_dir: &Path, project_dir: Option<&Path>) -> OrgTableConfig {
    Clapfig::builder()
        .app_name("orgtable")
        .file_name(CONFIG_FILE)
        .search_paths(config_search_paths(data_dir, project_dir))
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(options: &InitOptions) -> Result<OrgTableContext> {
    let data_dir = data_dir()?;
    let config = load_config(&data_dir, options.project_dir.as_deref());
    tracing::debug!(data_dir = %data_dir.display(), ?config, "initializing");

    let source = match &options.from_file {
        Some(path) => ConfiguredSource::File(FileSource::new(path)),
        None => ConfiguredSource::Http(HttpSource::new(&config.endpoint)?),
    };

    let store = RecordStore::new(source, FsSnapshot::new(&data_dir))
        .with_snapshot_writes(config.snapshot);
    let initial = ViewState::new(config.default_sort_column(), config.page_size());
    let api = OrgTableApi::new(store, initial);

    Ok(OrgTableContext {
        api,
        config,
        data_dir,
    })
}
