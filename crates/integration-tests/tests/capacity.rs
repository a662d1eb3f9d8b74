//! Quota-aware degradation of product writes.
//!
//! The in-memory store's per-key quota stands in for the backend's real
//! limit, which makes every branch of the degradation ladder drivable:
//! proactive retention, the reduced-record retry, and the terminal
//! failure.

#![allow(clippy::unwrap_used)]

use topup_core::{CategoryId, Price};
use topup_store::models::{OptionDraft, ProductDraft};
use topup_store::{CapacityPolicy, MemoryKv, PLACEHOLDER_IMAGE, Repository, StoreError};

fn draft(title: &str, description: &str) -> ProductDraft {
    ProductDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        image: "/images/card.png".to_owned(),
        category_id: CategoryId::new("cat-1"),
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
// Retention Tests
// ============================================================================

#[test]
fn test_collection_stays_near_cap_under_sustained_writes() {
    let mut repo = Repository::open(MemoryKv::new()).unwrap();
    let cap = repo.policy().max_products;

    for i in 0..30 {
        repo.create_product(draft(&format!("Product {i}"), "bulk")).unwrap();
    }

    let products = repo.products();
    assert!(products.len() <= cap + 1, "collection grew past the cap");

    // The newest write always survives; the seed catalog was evicted
    // long ago.
    assert!(products.iter().any(|p| p.title == "Product 29"));
    assert!(!products.iter().any(|p| p.title == "Free Fire Diamonds"));
}

#[test]
fn test_oversized_inline_image_replaced_before_write() {
    let policy = CapacityPolicy {
        max_inline_image_bytes: 64,
        ..CapacityPolicy::default()
    };
    let mut repo = Repository::with_policy(MemoryKv::new(), policy).unwrap();

    let mut product = draft("Big Image", "short");
    product.image = format!("data:image/png;base64,{}", "a".repeat(256));

    let created = repo.create_product(product).unwrap();
    assert_eq!(created.image, PLACEHOLDER_IMAGE);
}

// ============================================================================
// Quota Failure Tests
// ============================================================================

#[test]
fn test_quota_failure_retries_with_reduced_record() {
    // Large enough for the seed catalog, too small for a bloated record.
    let store = MemoryKv::with_quota(4 * 1024);
    let mut repo = Repository::open(store).unwrap();

    let created = repo
        .create_product(draft("Bloated", &"d".repeat(10_000)))
        .unwrap();

    assert_eq!(created.description.chars().count(), 100);
    assert_eq!(created.image, PLACEHOLDER_IMAGE);

    // The retry evicted one seed product to make room.
    let products = repo.products();
    assert_eq!(products.len(), 2);
    assert!(products.iter().any(|p| p.id == created.id));
}

#[test]
fn test_exhausted_storage_leaves_collection_untouched() {
    // A reduction that does not actually shrink the description cannot
    // rescue the write.
    let policy = CapacityPolicy {
        reduced_description_chars: 20_000,
        ..CapacityPolicy::default()
    };
    let store = MemoryKv::with_quota(4 * 1024);
    let mut repo = Repository::with_policy(store, policy).unwrap();

    let err = repo
        .create_product(draft("Bloated", &"d".repeat(10_000)))
        .unwrap_err();
    assert!(matches!(err, StoreError::StorageExhausted));

    let products = repo.products();
    assert_eq!(products.len(), 2);
    assert!(!products.iter().any(|p| p.title == "Bloated"));
}
