//! Category CRUD.
//!
//! Deleting a category does not cascade: products keep their (now
//! dangling) `category_id`.

use topup_core::CategoryId;

use crate::error::StoreError;
use crate::keys;
use crate::kv::KvStore;
use crate::models::{Category, CategoryDraft, CategoryPatch};

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// All categories, in stored order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.read_collection(keys::CATEGORIES)
    }

    /// Look up a category by ID.
    #[must_use]
    pub fn get_category_by_id(&self, id: &CategoryId) -> Option<Category> {
        self.categories().into_iter().find(|c| &c.id == id)
    }

    /// Store a new category, stamping its ID.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn create_category(&mut self, draft: CategoryDraft) -> Result<Category, StoreError> {
        let category = Category {
            id: CategoryId::generate(self.ids()),
            name: draft.name,
            description: draft.description,
        };

        let mut categories = self.categories();
        categories.push(category.clone());
        self.write_collection(keys::CATEGORIES, &categories)?;
        Ok(category)
    }

    /// Apply a patch to the category with the given ID.
    ///
    /// Returns the merged record, or `None` if the ID is absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, StoreError> {
        let mut categories = self.categories();
        let Some(category) = categories.iter_mut().find(|c| &c.id == id) else {
            return Ok(None);
        };
        patch.apply(category);
        let updated = category.clone();
        self.write_collection(keys::CATEGORIES, &categories)?;
        Ok(Some(updated))
    }

    /// Delete the category with the given ID.
    ///
    /// Returns whether a record was actually removed. Referencing products
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn delete_category(&mut self, id: &CategoryId) -> Result<bool, StoreError> {
        let mut categories = self.categories();
        let before = categories.len();
        categories.retain(|c| &c.id != id);
        if categories.len() == before {
            return Ok(false);
        }
        self.write_collection(keys::CATEGORIES, &categories)?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn test_create_update_delete() {
        let mut repo = Repository::open(MemoryKv::new()).unwrap();

        let created = repo
            .create_category(CategoryDraft {
                name: "Subscriptions".to_owned(),
                description: "Streaming and memberships".to_owned(),
            })
            .unwrap();
        assert!(created.id.as_str().starts_with("cat-"));

        let updated = repo
            .update_category(
                &created.id,
                CategoryPatch {
                    name: Some("Subscriptions & Memberships".to_owned()),
                    ..CategoryPatch::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.description, created.description);

        assert!(repo.delete_category(&created.id).unwrap());
        assert!(repo.get_category_by_id(&created.id).is_none());
    }

    #[test]
    fn test_delete_does_not_cascade_to_products() {
        let mut repo = Repository::open(MemoryKv::new()).unwrap();
        let category_id = CategoryId::new("cat-1");
        let referencing = repo.products_by_category(&category_id).len();
        assert!(referencing > 0);

        assert!(repo.delete_category(&category_id).unwrap());

        // Products keep the dangling reference.
        let products = repo.products();
        assert_eq!(
            products
                .iter()
                .filter(|p| p.category_id == category_id)
                .count(),
            referencing
        );
    }
}
