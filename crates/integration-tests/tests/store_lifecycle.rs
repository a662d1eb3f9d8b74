//! File persistence, wire layout, and reset semantics.
//!
//! These tests exercise the repository over the file-backed store the
//! way a deployment would: open, mutate, drop, reopen.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use topup_core::Price;
use topup_store::models::{OptionDraft, ProductDraft, UserDraft};
use topup_store::{FileKv, Repository, keys};

fn open_repo(path: &Path) -> Repository<FileKv> {
    let store = FileKv::open(path).unwrap();
    Repository::open(store).unwrap()
}

fn draft(title: &str, category_id: topup_core::CategoryId) -> ProductDraft {
    ProductDraft {
        title: title.to_owned(),
        description: "Instant digital delivery".to_owned(),
        image: "/images/card.png".to_owned(),
        category_id,
        in_stock: true,
        on_sale: false,
        featured: false,
        options: vec![OptionDraft {
            name: "Standard".to_owned(),
            price: Price::new(500),
            in_stock: true,
        }],
    }
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let created = {
        let mut repo = open_repo(&path);
        let category = repo.categories().into_iter().next().unwrap();
        repo.create_product(draft("Steam Wallet", category.id)).unwrap()
    };

    let repo = open_repo(&path);
    let found = repo.get_product_by_id(&created.id).unwrap();
    assert_eq!(found, created);
}

#[test]
fn test_reopen_never_reseeds_over_existing_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut repo = open_repo(&path);
        let seeded = repo.products();
        for product in &seeded {
            repo.delete_product(&product.id).unwrap();
        }
        assert!(repo.products().is_empty());
    }

    // An empty collection is data too; only a missing key gets seeded.
    let repo = open_repo(&path);
    assert!(repo.products().is_empty());
}

// ============================================================================
// Wire Layout Tests
// ============================================================================

#[test]
fn test_file_layout_matches_persisted_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut repo = open_repo(&path);
        repo.register_user(UserDraft {
            name: "Casey".to_owned(),
            email: topup_core::Email::parse("casey@example.com").unwrap(),
            password: "hunter2".to_owned(),
        })
        .unwrap();
        repo.login_user("casey@example.com", "hunter2").unwrap();
        assert!(repo.admin_login("admin", "admin").unwrap());
    }

    let raw = std::fs::read_to_string(&path).unwrap();
    let root: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for key in [
        keys::PRODUCTS,
        keys::CATEGORIES,
        keys::ORDERS,
        keys::USERS,
        keys::CONTACT_SUBMISSIONS,
        keys::CURRENT_USER,
        keys::ADMIN_TOKEN,
    ] {
        assert!(root.get(key).is_some(), "missing key {key}");
    }

    // Collections are stored as JSON strings, not nested JSON.
    let products_blob = root[keys::PRODUCTS].as_str().unwrap();
    let products: serde_json::Value = serde_json::from_str(products_blob).unwrap();
    let first = &products[0];
    assert!(first["categoryId"].is_string());
    assert!(first["inStock"].is_boolean());
    assert!(first["createdAt"].is_string());
    assert!(first["options"][0]["price"].is_number());
}

// ============================================================================
// Reset Tests
// ============================================================================

#[test]
fn test_reset_restores_seed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut repo = open_repo(&path);
    let category = repo.categories().into_iter().next().unwrap();
    repo.create_product(draft("Steam Wallet", category.id)).unwrap();
    repo.update_admin_credentials("owner", "s3cret").unwrap();
    assert!(repo.admin_login("owner", "s3cret").unwrap());

    repo.clear_all(false).unwrap();

    assert_eq!(repo.products().len(), 2);
    assert_eq!(repo.categories().len(), 2);
    assert!(!repo.check_admin_auth());
    assert_eq!(repo.admin_credentials().username, "admin");
}

#[test]
fn test_reset_can_keep_admin_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut repo = open_repo(&path);
    assert!(repo.admin_login("admin", "admin").unwrap());

    repo.clear_all(true).unwrap();

    assert!(repo.check_admin_auth());
    assert_eq!(repo.products().len(), 2);
}
