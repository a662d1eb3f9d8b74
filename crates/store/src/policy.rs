//! Capacity policy for quota-aware product writes.
//!
//! The policy is a plain value invoked once before a product write
//! (proactive image capping and retention eviction) and once after a failed
//! one (reduced-record retry), so every step is unit-testable without a
//! storage medium.

use crate::models::Product;

/// Fixed stand-in image reference used when inline image data is rejected.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=192&width=256";

/// Prefix identifying an inlined (data-URL) image payload.
const INLINE_IMAGE_PREFIX: &str = "data:image";

/// Whether `value` is an inlined image payload rather than a URL or token.
#[must_use]
pub fn is_inline_image(value: &str) -> bool {
    value.starts_with(INLINE_IMAGE_PREFIX)
}

/// Limits applied to product writes to keep collections inside the
/// backend's per-key quota.
#[derive(Debug, Clone)]
pub struct CapacityPolicy {
    /// Inline image payloads above this many bytes are swapped for
    /// [`PLACEHOLDER_IMAGE`] before the write.
    pub max_inline_image_bytes: usize,
    /// When the collection already holds more than this many products,
    /// older records are dropped before appending.
    pub max_products: usize,
    /// How many newest-by-creation products survive such a drop.
    pub retained_products: usize,
    /// Description length (in characters) of a reduced record.
    pub reduced_description_chars: usize,
    /// Option-list length of a reduced record.
    pub reduced_options: usize,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            max_inline_image_bytes: 8 * 1024,
            max_products: 20,
            retained_products: 19,
            reduced_description_chars: 100,
            reduced_options: 3,
        }
    }
}

impl CapacityPolicy {
    /// Whether `image` is an inline payload over the configured cap.
    #[must_use]
    pub fn is_oversized_inline(&self, image: &str) -> bool {
        image.starts_with(INLINE_IMAGE_PREFIX) && image.len() > self.max_inline_image_bytes
    }

    /// Replace an oversized inline image with the placeholder token.
    #[must_use]
    pub fn cap_image(&self, image: String) -> String {
        if self.is_oversized_inline(&image) {
            PLACEHOLDER_IMAGE.to_owned()
        } else {
            image
        }
    }

    /// Drop the oldest records when the collection is over `max_products`,
    /// keeping the `retained_products` newest by creation timestamp.
    ///
    /// No-op when the collection is at or under the maximum.
    pub fn retain_newest(&self, products: &mut Vec<Product>) {
        if products.len() > self.max_products {
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            products.truncate(self.retained_products);
        }
    }

    /// Remove and return the single oldest record by creation timestamp.
    pub fn evict_oldest(products: &mut Vec<Product>) -> Option<Product> {
        let oldest = products
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.created_at)
            .map(|(i, _)| i)?;
        Some(products.remove(oldest))
    }

    /// Build the reduced form of a product for the quota-failure retry:
    /// truncated description, placeholder image, capped option list.
    #[must_use]
    pub fn reduce(&self, product: &Product) -> Product {
        let mut reduced = product.clone();
        reduced.description = reduced
            .description
            .chars()
            .take(self.reduced_description_chars)
            .collect();
        reduced.image = PLACEHOLDER_IMAGE.to_owned();
        reduced.options.truncate(self.reduced_options);
        reduced
    }
}
