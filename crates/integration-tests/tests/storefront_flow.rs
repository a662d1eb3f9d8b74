//! End-to-end catalog, account, and order flows against the seeded store.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use topup_core::{Email, OrderStatus, Price};
use topup_store::models::{OptionDraft, OrderDraft, ProductDraft, UserDraft};
use topup_store::{MemoryKv, Repository};

fn gift_card_draft(category_id: topup_core::CategoryId) -> ProductDraft {
    ProductDraft {
        title: "Steam Wallet".to_owned(),
        description: "Redeemable Steam wallet codes".to_owned(),
        image: "/images/steam.png".to_owned(),
        category_id,
        in_stock: true,
        on_sale: false,
        featured: true,
        options: vec![
            OptionDraft {
                name: "$5".to_owned(),
                price: Price::new(500),
                in_stock: true,
            },
            OptionDraft {
                name: "$1".to_owned(),
                price: Price::new(100),
                in_stock: true,
            },
        ],
    }
}

#[test]
fn test_gift_card_catalog_flow() {
    let mut repo = Repository::open(MemoryKv::new()).unwrap();

    let gift_cards = repo
        .categories()
        .into_iter()
        .find(|c| c.name == "Gift Cards")
        .unwrap();

    let product = repo.create_product(gift_card_draft(gift_cards.id.clone())).unwrap();
    assert_eq!(product.price_range(), Some((Price::new(100), Price::new(500))));

    let in_category = repo.products_by_category(&gift_cards.id);
    assert!(in_category.iter().any(|p| p.id == product.id));
    assert!(repo.featured_products().iter().any(|p| p.id == product.id));

    // Deleting the category leaves the product behind with a dangling
    // category reference.
    assert!(repo.delete_category(&gift_cards.id).unwrap());
    let orphan = repo.get_product_by_id(&product.id).unwrap();
    assert_eq!(orphan.category_id, gift_cards.id);
    assert!(repo.get_category_by_id(&gift_cards.id).is_none());
}

#[test]
fn test_purchase_flow_from_registration_to_completion() {
    let mut repo = Repository::open(MemoryKv::new()).unwrap();

    let user = repo
        .register_user(UserDraft {
            name: "Casey".to_owned(),
            email: Email::parse("casey@example.com").unwrap(),
            password: "hunter2".to_owned(),
        })
        .unwrap();
    repo.login_user("casey@example.com", "hunter2").unwrap();
    assert_eq!(repo.current_user().unwrap().id, user.id);

    let product = repo.products().into_iter().next().unwrap();
    let option = product.options.first().unwrap().clone();

    let order = repo
        .create_order(OrderDraft {
            customer_name: user.name.clone(),
            customer_email: user.email.clone(),
            customer_phone: "+8801234567890".to_owned(),
            product_id: product.id.clone(),
            product_title: product.title.clone(),
            option_id: option.id.clone(),
            option_name: option.name.clone(),
            price: option.price,
            uid: "player-42".to_owned(),
            payment_method: "bkash".to_owned(),
            payment_proof: None,
        })
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.date, Utc::now().date_naive());

    // The order snapshot outlives the product it was taken from.
    assert!(repo.delete_product(&product.id).unwrap());
    let stored = repo.get_order_by_id(&order.id).unwrap();
    assert_eq!(stored.product_title, product.title);
    assert_eq!(stored.price, option.price);

    let completed = repo
        .transition_order_status(&order.id, OrderStatus::Completed)
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    repo.logout_user();
    assert!(repo.current_user().is_none());
}
