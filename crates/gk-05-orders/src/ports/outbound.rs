//! # Outbound Ports (Driven Ports)

use crate::domain::entities::{NewOrder, Order};
use crate::domain::errors::OrderStoreError;
use shared_types::OwnerId;

/// Abstract interface over order persistence.
pub trait OrderStore: Send + Sync {
    /// Insert an order and return it with its assigned id.
    fn insert(&self, order: NewOrder) -> Result<Order, OrderStoreError>;

    /// Lifetime sum of order amounts for `owner_id`. Drives tier selection.
    fn total_amount_for_owner(&self, owner_id: OwnerId) -> Result<f64, OrderStoreError>;
}
