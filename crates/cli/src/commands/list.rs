//! Print a collection or singleton as JSON.

use std::path::Path;

use clap::ValueEnum;

use super::CliError;

/// The collections and singletons the `list` command can print.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Collection {
    Products,
    Categories,
    Orders,
    Users,
    ContactSubmissions,
    SiteConfig,
}

/// Pretty-print the chosen collection from the store at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or serialization fails.
#[allow(clippy::print_stdout)]
pub fn run(path: &Path, collection: Collection) -> Result<(), CliError> {
    let repo = super::open_repository(path)?;

    let rendered = match collection {
        Collection::Products => serde_json::to_string_pretty(&repo.products()),
        Collection::Categories => serde_json::to_string_pretty(&repo.categories()),
        Collection::Orders => serde_json::to_string_pretty(&repo.orders()),
        Collection::Users => serde_json::to_string_pretty(&repo.users()),
        Collection::ContactSubmissions => {
            serde_json::to_string_pretty(&repo.contact_submissions())
        }
        Collection::SiteConfig => serde_json::to_string_pretty(&repo.site_config()),
    }
    .map_err(topup_store::StoreError::from)?;

    println!("{rendered}");
    Ok(())
}
