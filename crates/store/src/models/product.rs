//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use topup_core::{CategoryId, OptionId, Price, ProductId};

use crate::error::ValidationError;

/// A catalog product (game top-up or gift card).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID (`prod-<millis>` token).
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long description shown on the product page.
    pub description: String,
    /// Image reference: a URL, a placeholder token, or inlined image data.
    pub image: String,
    /// Soft reference to the owning category. Deleting the category does
    /// not cascade; this ID may dangle.
    pub category_id: CategoryId,
    /// Whether the product is purchasable at all.
    pub in_stock: bool,
    /// Shown with a sale badge.
    pub on_sale: bool,
    /// Shown on the home page.
    pub featured: bool,
    /// Creation timestamp; drives oldest-first eviction.
    pub created_at: DateTime<Utc>,
    /// Purchase options, owned exclusively by this product.
    pub options: Vec<ProductOption>,
}

impl Product {
    /// Cheapest and priciest option, if any options exist.
    #[must_use]
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let min = self.options.iter().map(|o| o.price).min()?;
        let max = self.options.iter().map(|o| o.price).max()?;
        Some((min, max))
    }
}

/// A purchase option (denomination) of a product.
///
/// Option IDs are unique within the owning product only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Option ID (`opt-<millis>` token).
    pub id: OptionId,
    /// Display name, e.g. "310 Diamonds".
    pub name: String,
    /// Price in whole currency-agnostic units.
    pub price: Price,
    /// Whether this denomination is currently available.
    pub in_stock: bool,
}

/// Caller-supplied fields for creating a product.
///
/// The repository stamps the ID, creation timestamp, and option IDs.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category_id: CategoryId,
    pub in_stock: bool,
    pub on_sale: bool,
    pub featured: bool,
    pub options: Vec<OptionDraft>,
}

/// Caller-supplied fields for one purchase option.
#[derive(Debug, Clone)]
pub struct OptionDraft {
    pub name: String,
    pub price: Price,
    pub in_stock: bool,
}

impl ProductDraft {
    /// Check required fields, reporting the first violated rule.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.category_id.as_str().trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if self.options.is_empty() {
            return Err(ValidationError::NoOptions);
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.name.trim().is_empty() {
                return Err(ValidationError::OptionMissingName { index });
            }
            if !option.price.is_non_negative() {
                return Err(ValidationError::OptionNegativePrice { index });
            }
        }
        Ok(())
    }
}

/// Field-by-field update for a product.
///
/// `None` leaves the stored field untouched. Replacing `options` swaps the
/// whole list; there is no per-option merge.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub in_stock: Option<bool>,
    pub on_sale: Option<bool>,
    pub featured: Option<bool>,
    pub options: Option<Vec<ProductOption>>,
}

impl ProductPatch {
    pub(crate) fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(on_sale) = self.on_sale {
            product.on_sale = on_sale;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
        if let Some(options) = self.options {
            product.options = options;
        }
    }
}
