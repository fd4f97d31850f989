//! # In-Memory Order Store

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{NewOrder, Order};
use crate::domain::errors::OrderStoreError;
use crate::ports::outbound::OrderStore;
use shared_types::OwnerId;

/// In-memory [`OrderStore`] backed by an append-only `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
    next_id: AtomicU64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, order: NewOrder) -> Result<Order, OrderStoreError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| OrderStoreError::LockPoisoned)?;
        let row = Order {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            owner_id: order.owner_id,
            amount: order.amount,
            cashback_percent: order.cashback_percent,
            cashback_points: order.cashback_points,
            admin_id: order.admin_id,
            qr_token: order.qr_token,
            created_at: order.created_at,
        };
        orders.push(row.clone());
        Ok(row)
    }

    fn total_amount_for_owner(&self, owner_id: OwnerId) -> Result<f64, OrderStoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| OrderStoreError::LockPoisoned)?;
        Ok(orders
            .iter()
            .filter(|o| o.owner_id == owner_id)
            .map(|o| o.amount)
            .sum())
    }
}
