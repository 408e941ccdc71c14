use std::collections::HashSet;

use crate::domain::order::Order;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate order id in store: {0}")]
    DuplicateId(String),

    #[error("Order {0} has no dishes")]
    NoDishes(String),
}

/// Ordered, mutable collection of orders.
///
/// Positions returned by [`OrderStore::position`] are only meaningful until
/// the next append or removal.
pub trait OrderStore: Send {
    fn position(&self, order_id: &str) -> Option<usize>;

    fn get(&self, index: usize) -> Option<&Order>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Order>;

    fn append(&mut self, order: Order);

    fn remove(&mut self, index: usize) -> Option<Order>;

    fn all(&self) -> &[Order];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn contains(&self, order_id: &str) -> bool {
        self.position(order_id).is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Vec<Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pre-existing records, refusing anything that
    /// breaks the store invariants.
    pub fn with_orders(orders: Vec<Order>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for order in &orders {
            if !seen.insert(order.id.as_str()) {
                return Err(StoreError::DuplicateId(order.id.clone()));
            }
            if order.dishes.is_empty() {
                return Err(StoreError::NoDishes(order.id.clone()));
            }
        }

        Ok(Self { orders })
    }
}

impl OrderStore for InMemoryOrderStore {
    fn position(&self, order_id: &str) -> Option<usize> {
        self.orders.iter().position(|order| order.id == order_id)
    }

    fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Order> {
        self.orders.get_mut(index)
    }

    fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    fn remove(&mut self, index: usize) -> Option<Order> {
        (index < self.orders.len()).then(|| self.orders.remove(index))
    }

    fn all(&self) -> &[Order] {
        &self.orders
    }
}
