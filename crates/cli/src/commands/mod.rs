//! CLI subcommands.

pub mod admin;
pub mod list;
pub mod reset;
pub mod seed;

use std::path::{Path, PathBuf};

use thiserror::Error;

use topup_store::{FileKv, KvError, Repository, StoreError};

/// Errors shared by the store-file commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// No store path was given on the command line or in the environment.
    #[error("No store path given: pass --store or set TOPUP_STORE_PATH")]
    MissingStorePath,

    /// Opening the store file failed.
    #[error("Failed to open store: {0}")]
    OpenStore(#[from] KvError),

    /// A repository operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolve the store file path from the flag or the environment.
///
/// # Errors
///
/// Returns [`CliError::MissingStorePath`] when neither is set.
pub fn store_path(flag: Option<PathBuf>) -> Result<PathBuf, CliError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    flag.or_else(|| std::env::var_os("TOPUP_STORE_PATH").map(PathBuf::from))
        .ok_or(CliError::MissingStorePath)
}

/// Open the repository over the file-backed store at `path`.
///
/// Seeds the default catalog when the file is new.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the seed write fails.
pub fn open_repository(path: &Path) -> Result<Repository<FileKv>, CliError> {
    let store = FileKv::open(path)?;
    Ok(Repository::open(store)?)
}
