//! Category domain types.

use serde::{Deserialize, Serialize};

use topup_core::CategoryId;

/// A product category.
///
/// Referenced softly from `Product::category_id`; deleting a category
/// leaves its products with a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category ID (`cat-<millis>` token).
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
}

/// Caller-supplied fields for creating a category.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// Field-by-field update for a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryPatch {
    pub(crate) fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
    }
}
