//! Order CRUD and the guarded status transition.

use chrono::Utc;

use topup_core::{OrderId, OrderStatus};

use crate::error::{StoreError, ValidationError};
use crate::keys;
use crate::kv::KvStore;
use crate::models::{Order, OrderDraft, OrderPatch};

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// All orders, in stored order.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.read_collection(keys::ORDERS)
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn get_order_by_id(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|o| &o.id == id)
    }

    /// Store a new order, stamping its ID, date, and pending status.
    ///
    /// The draft carries the product/option snapshot (title, option name,
    /// price) so the order stays readable after catalog edits.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn create_order(&mut self, draft: OrderDraft) -> Result<Order, StoreError> {
        let order = Order {
            id: OrderId::generate(self.ids()),
            date: Utc::now().date_naive(),
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            product_id: draft.product_id,
            product_title: draft.product_title,
            option_id: draft.option_id,
            option_name: draft.option_name,
            price: draft.price,
            uid: draft.uid,
            payment_method: draft.payment_method,
            payment_proof: draft.payment_proof,
            status: OrderStatus::Pending,
        };

        let mut orders = self.orders();
        orders.push(order.clone());
        self.write_collection(keys::ORDERS, &orders)?;
        Ok(order)
    }

    /// Apply a patch to the order with the given ID.
    ///
    /// Returns the merged record, or `None` if the ID is absent. A `status`
    /// field in the patch is applied as-is; use
    /// [`transition_order_status`](Self::transition_order_status) when
    /// transition legality matters.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn update_order(
        &mut self,
        id: &OrderId,
        patch: OrderPatch,
    ) -> Result<Option<Order>, StoreError> {
        let mut orders = self.orders();
        let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
            return Ok(None);
        };
        patch.apply(order);
        let updated = order.clone();
        self.write_collection(keys::ORDERS, &orders)?;
        Ok(Some(updated))
    }

    /// Move an order to a new status, enforcing transition legality:
    /// pending orders may complete or cancel, terminal orders never move.
    ///
    /// Returns the updated record, or `None` if the ID is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IllegalStatusTransition`] for any move
    /// the lifecycle does not allow, or a storage error if persisting the
    /// collection fails.
    pub fn transition_order_status(
        &mut self,
        id: &OrderId,
        to: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let mut orders = self.orders();
        let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
            return Ok(None);
        };

        if !order.status.can_transition_to(to) {
            return Err(ValidationError::IllegalStatusTransition {
                id: order.id.clone(),
                from: order.status,
                to,
            }
            .into());
        }

        order.status = to;
        let updated = order.clone();
        self.write_collection(keys::ORDERS, &orders)?;
        Ok(Some(updated))
    }

    /// Delete the order with the given ID.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the collection fails.
    pub fn delete_order(&mut self, id: &OrderId) -> Result<bool, StoreError> {
        let mut orders = self.orders();
        let before = orders.len();
        orders.retain(|o| &o.id != id);
        if orders.len() == before {
            return Ok(false);
        }
        self.write_collection(keys::ORDERS, &orders)?;
        Ok(true)
    }
}
