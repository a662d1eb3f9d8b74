//! Wipe the store and restore the seed data.

use std::path::Path;

use tracing::info;

use super::CliError;

/// Clear every key in the store at `path`, then reseed the catalog.
///
/// With `keep_admin_session` the admin stays logged in across the wipe;
/// the admin credentials themselves are always reset to the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a write fails.
pub fn run(path: &Path, keep_admin_session: bool) -> Result<(), CliError> {
    let mut repo = super::open_repository(path)?;
    repo.clear_all(keep_admin_session)?;

    info!(path = %path.display(), keep_admin_session, "Store reset");
    Ok(())
}
