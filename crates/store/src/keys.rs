//! Persisted key layout.
//!
//! The complete persisted-state contract: every piece of state the
//! repository touches lives under one of these keys. Collection values are
//! JSON arrays, singletons are JSON objects, and the two image side keys
//! hold raw inlined image data referenced by token from the site config.

/// List of `Product`.
pub const PRODUCTS: &str = "products";
/// List of `Category`.
pub const CATEGORIES: &str = "categories";
/// List of `Order`.
pub const ORDERS: &str = "orders";
/// List of `User`.
pub const USERS: &str = "users";
/// List of `ContactSubmission`.
pub const CONTACT_SUBMISSIONS: &str = "contactSubmissions";

/// `SiteConfig` singleton, with large inline images swapped for tokens.
pub const SITE_CONFIG: &str = "siteConfig";
/// Raw inlined logo image data, when the config's logo holds a token.
pub const SITE_LOGO_IMAGE: &str = "siteLogoImage";
/// Raw inlined QR-code image data, when the config's QR field holds a token.
pub const SITE_QR_IMAGE: &str = "siteQrCodeImage";

/// Serialized admin session (token + issued-at).
pub const ADMIN_TOKEN: &str = "adminToken";
/// Admin credential singleton, split across two keys.
pub const ADMIN_USERNAME: &str = "adminUsername";
/// Admin credential singleton, split across two keys.
pub const ADMIN_PASSWORD: &str = "adminPassword";

/// Serialized `User` session copy for the logged-in customer.
pub const CURRENT_USER: &str = "currentUser";
