//! Order domain types.
//!
//! Orders snapshot the product and option they were placed against
//! (title, option name, price) so history stays readable after the catalog
//! changes or the product is deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use topup_core::{Email, OptionId, OrderId, OrderStatus, Price, ProductId};

/// A customer order for one product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID (`order-<millis>` token).
    pub id: OrderId,
    /// Day the order was placed.
    pub date: NaiveDate,
    /// Customer contact name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: Email,
    /// Customer contact phone.
    pub customer_phone: String,
    /// Product reference at purchase time (may dangle after deletes).
    pub product_id: ProductId,
    /// Product title snapshot.
    pub product_title: String,
    /// Option reference at purchase time.
    pub option_id: OptionId,
    /// Option name snapshot.
    pub option_name: String,
    /// Price snapshot.
    pub price: Price,
    /// Game account identifier the top-up is delivered to.
    pub uid: String,
    /// Payment method chosen at checkout.
    pub payment_method: String,
    /// Inlined payment-proof image, if the customer uploaded one.
    pub payment_proof: Option<String>,
    /// Lifecycle status; defaults to pending on create.
    pub status: OrderStatus,
}

/// Caller-supplied fields for creating an order.
///
/// The repository stamps the ID, date, and pending status.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub product_id: ProductId,
    pub product_title: String,
    pub option_id: OptionId,
    pub option_name: String,
    pub price: Price,
    pub uid: String,
    pub payment_method: String,
    pub payment_proof: Option<String>,
}

/// Field-by-field update for an order.
///
/// `payment_proof` is doubly optional: the outer `Option` is "touch this
/// field at all", the inner one is the stored nullable value. Note that
/// `status` here bypasses transition legality; use
/// `Repository::transition_order_status` for guarded changes.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub customer_name: Option<String>,
    pub customer_email: Option<Email>,
    pub customer_phone: Option<String>,
    pub uid: Option<String>,
    pub payment_method: Option<String>,
    pub payment_proof: Option<Option<String>>,
    pub status: Option<OrderStatus>,
}

impl OrderPatch {
    pub(crate) fn apply(self, order: &mut Order) {
        if let Some(customer_name) = self.customer_name {
            order.customer_name = customer_name;
        }
        if let Some(customer_email) = self.customer_email {
            order.customer_email = customer_email;
        }
        if let Some(customer_phone) = self.customer_phone {
            order.customer_phone = customer_phone;
        }
        if let Some(uid) = self.uid {
            order.uid = uid;
        }
        if let Some(payment_method) = self.payment_method {
            order.payment_method = payment_method;
        }
        if let Some(payment_proof) = self.payment_proof {
            order.payment_proof = payment_proof;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
    }
}
