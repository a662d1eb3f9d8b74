//! Default seed data.
//!
//! On open (and after a bulk reset) each collection key is written with its
//! default payload if and only if the key is entirely absent. Existing
//! data, including an empty collection, is never overwritten.

use chrono::Utc;
use serde::Serialize;

use topup_core::{CategoryId, OptionId, Price, ProductId};

use crate::error::StoreError;
use crate::keys;
use crate::kv::KvStore;
use crate::models::{Category, Product, ProductOption};

/// The two sample categories seeded into an empty store.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new("cat-1"),
            name: "Mobile Games".to_owned(),
            description: "Top-up for popular mobile games".to_owned(),
        },
        Category {
            id: CategoryId::new("cat-2"),
            name: "Gift Cards".to_owned(),
            description: "Gift cards for various platforms".to_owned(),
        },
    ]
}

/// The two sample products seeded into an empty store.
#[must_use]
pub fn default_products() -> Vec<Product> {
    let option = |id: &str, name: &str, price: i64| ProductOption {
        id: OptionId::new(id),
        name: name.to_owned(),
        price: Price::new(price),
        in_stock: true,
    };

    vec![
        Product {
            id: ProductId::new("prod-1"),
            title: "Free Fire Diamonds".to_owned(),
            description: "Top up your Free Fire account with diamonds".to_owned(),
            image: crate::policy::PLACEHOLDER_IMAGE.to_owned(),
            category_id: CategoryId::new("cat-1"),
            in_stock: true,
            on_sale: true,
            featured: true,
            created_at: Utc::now(),
            options: vec![
                option("opt-1", "100 Diamonds", 100),
                option("opt-2", "310 Diamonds", 300),
                option("opt-3", "520 Diamonds", 500),
                option("opt-4", "1060 Diamonds", 1000),
            ],
        },
        Product {
            id: ProductId::new("prod-2"),
            title: "PUBG Mobile UC".to_owned(),
            description: "Top up your PUBG Mobile account with UC".to_owned(),
            image: crate::policy::PLACEHOLDER_IMAGE.to_owned(),
            category_id: CategoryId::new("cat-1"),
            in_stock: true,
            on_sale: false,
            featured: true,
            created_at: Utc::now(),
            options: vec![
                option("opt-5", "60 UC", 100),
                option("opt-6", "325 UC", 500),
                option("opt-7", "660 UC", 1000),
            ],
        },
    ]
}

/// Seed every absent collection key with its default payload.
pub(crate) fn initialize<S: KvStore>(store: &mut S) -> Result<(), StoreError> {
    seed_absent(store, keys::CATEGORIES, &default_categories())?;
    seed_absent(store, keys::PRODUCTS, &default_products())?;
    seed_empty(store, keys::ORDERS)?;
    seed_empty(store, keys::USERS)?;
    seed_empty(store, keys::CONTACT_SUBMISSIONS)?;
    Ok(())
}

fn seed_empty<S: KvStore>(store: &mut S, key: &str) -> Result<(), StoreError> {
    if store.get(key).is_none() {
        store.set(key, "[]")?;
    }
    Ok(())
}

fn seed_absent<S: KvStore, T: Serialize>(
    store: &mut S,
    key: &str,
    items: &[T],
) -> Result<(), StoreError> {
    if store.get(key).is_none() {
        let raw = serde_json::to_string(items)?;
        store.set(key, &raw)?;
    }
    Ok(())
}
