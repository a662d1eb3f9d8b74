//! Stored record types.
//!
//! Every record serializes with camelCase field names; the JSON shapes here
//! are the persisted-state contract and must not drift. Create operations
//! take *draft* types (caller-supplied fields only), updates take *patch*
//! types (one `Option` per patchable field, applied field by field).

pub mod category;
pub mod contact;
pub mod order;
pub mod product;
pub mod site;
pub mod user;

pub use category::{Category, CategoryDraft, CategoryPatch};
pub use contact::{ContactSubmission, SubmissionDraft};
pub use order::{Order, OrderDraft, OrderPatch};
pub use product::{OptionDraft, Product, ProductDraft, ProductOption, ProductPatch};
pub use site::{AdminCredentials, SiteConfig, SiteConfigPatch};
pub use user::{User, UserDraft, UserPatch};
