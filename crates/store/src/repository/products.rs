//! Product CRUD with quota-aware degradation.

use chrono::Utc;
use tracing::warn;

use topup_core::{CategoryId, OptionId, ProductId};

use crate::error::StoreError;
use crate::keys;
use crate::kv::{KvError, KvStore};
use crate::models::{Product, ProductDraft, ProductOption, ProductPatch};

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// All products, in stored order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read_collection(keys::PRODUCTS)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get_product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.products().into_iter().find(|p| &p.id == id)
    }

    /// Products referencing the given category.
    ///
    /// A deleted category simply matches nothing; dangling references stay
    /// in place.
    #[must_use]
    pub fn products_by_category(&self, category_id: &CategoryId) -> Vec<Product> {
        self.products()
            .into_iter()
            .filter(|p| &p.category_id == category_id)
            .collect()
    }

    /// Products flagged for the home page.
    #[must_use]
    pub fn featured_products(&self) -> Vec<Product> {
        self.products().into_iter().filter(|p| p.featured).collect()
    }

    /// Validate and store a new product.
    ///
    /// Stamps the ID, creation timestamp, and option IDs. Before the write,
    /// an oversized inline image is swapped for the placeholder and, when
    /// the collection is over the policy maximum, the oldest records are
    /// dropped to the retention count. If the write itself is refused for
    /// quota, the product is retried once in reduced form with the single
    /// oldest record evicted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when a required field is missing
    /// or invalid, [`StoreError::StorageExhausted`] when even the reduced
    /// retry does not fit, or a storage error from the backend.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<Product, StoreError> {
        draft.validate()?;

        let product = Product {
            id: ProductId::generate(self.ids()),
            title: draft.title,
            description: draft.description,
            image: self.policy().cap_image(draft.image),
            category_id: draft.category_id,
            in_stock: draft.in_stock,
            on_sale: draft.on_sale,
            featured: draft.featured,
            created_at: Utc::now(),
            options: draft
                .options
                .into_iter()
                .map(|o| ProductOption {
                    id: OptionId::generate(self.ids()),
                    name: o.name,
                    price: o.price,
                    in_stock: o.in_stock,
                })
                .collect(),
        };

        let mut products = self.products();
        self.policy().retain_newest(&mut products);
        products.push(product.clone());

        match self.write_collection(keys::PRODUCTS, &products) {
            Ok(()) => Ok(product),
            Err(StoreError::Storage(KvError::QuotaExceeded { size, quota, .. })) => {
                warn!(size, quota, "product write over quota, retrying reduced");
                self.create_product_reduced(product)
            }
            Err(err) => Err(err),
        }
    }

    /// Quota-failure fallback: reduced record, single oldest evicted.
    fn create_product_reduced(&mut self, product: Product) -> Result<Product, StoreError> {
        let reduced = self.policy().reduce(&product);

        let mut products: Vec<Product> = self
            .products()
            .into_iter()
            .filter(|p| p.id != product.id)
            .collect();
        crate::policy::CapacityPolicy::evict_oldest(&mut products);
        products.push(reduced.clone());

        self.write_collection(keys::PRODUCTS, &products)
            .map_err(|err| match err {
                StoreError::Storage(KvError::QuotaExceeded { .. }) => {
                    StoreError::StorageExhausted
                }
                other => other,
            })?;
        Ok(reduced)
    }

    /// Apply a patch to the product with the given ID.
    ///
    /// Returns the merged record, or `None` if the ID is absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products();
        let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        patch.apply(product);
        let updated = product.clone();
        self.write_collection(keys::PRODUCTS, &products)?;
        Ok(Some(updated))
    }

    /// Delete the product with the given ID.
    ///
    /// Returns whether a record was actually removed; nothing is persisted
    /// on a miss.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        let mut products = self.products();
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Ok(false);
        }
        self.write_collection(keys::PRODUCTS, &products)?;
        Ok(true)
    }
}
