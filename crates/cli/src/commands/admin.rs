//! Admin credential management commands.
//!
//! # Usage
//!
//! ```bash
//! topup --store store.json admin set-credentials -u owner -p s3cret
//! ```

use std::path::Path;

use tracing::info;

use super::CliError;

/// Replace the stored admin username and password.
///
/// # Errors
///
/// Returns an error if either field is empty, the file cannot be read,
/// or a write fails.
pub fn set_credentials(path: &Path, username: &str, password: &str) -> Result<(), CliError> {
    let mut repo = super::open_repository(path)?;
    repo.update_admin_credentials(username, password)?;

    info!(username, "Admin credentials updated");
    Ok(())
}
