use crate::store::{IdGenerator, OrderStore};

use super::commands::{OrderCommand, OrderPayload};
use super::errors::OrderError;
use super::pipeline::{self, CheckedUpdate};
use super::validation::ValidatedOrder;
use super::value_objects::{Order, OrderStatus};

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Command -> Validation chain -> Resource operation -> Store
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Created(Order),
    Found(Order),
    Updated(Order),
    Deleted,
    Listed(Vec<Order>),
}

pub struct OrderCommandHandler<S, G> {
    store: S,
    ids: G,
}

impl<S: OrderStore, G: IdGenerator> OrderCommandHandler<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the command's chain and, if it passes, its resource operation.
    pub fn handle(&mut self, command: OrderCommand) -> Result<OrderOutcome, OrderError> {
        let operation = command.operation();

        let result = match command {
            OrderCommand::Create { payload } => self.create(&payload),
            OrderCommand::Read { order_id } => self.read(&order_id),
            OrderCommand::Update { order_id, payload } => self.update(&order_id, &payload),
            OrderCommand::Delete { order_id } => self.destroy(&order_id),
            OrderCommand::List => Ok(self.list()),
        };

        if let Err(err) = &result {
            tracing::warn!(
                operation,
                kind = err.kind().as_str(),
                error = %err,
                "Order request rejected"
            );
        }

        result
    }

    fn create(&mut self, payload: &OrderPayload) -> Result<OrderOutcome, OrderError> {
        let validated = pipeline::check_create(payload)?;
        let order = self.insert(validated);

        tracing::info!(order_id = %order.id, dishes = order.dishes.len(), "Order created");
        Ok(OrderOutcome::Created(order))
    }

    fn read(&self, order_id: &str) -> Result<OrderOutcome, OrderError> {
        let index = pipeline::check_read(&self.store, order_id)?;
        let order = self.resolved(index, order_id)?;

        tracing::debug!(order_id, "Order read");
        Ok(OrderOutcome::Found(order.clone()))
    }

    fn update(&mut self, order_id: &str, payload: &OrderPayload) -> Result<OrderOutcome, OrderError> {
        let CheckedUpdate {
            index,
            order: validated,
            status,
        } = pipeline::check_update(&self.store, order_id, payload)?;

        let order = self
            .store
            .get_mut(index)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        // Identity stays with the stored record; everything else is replaced.
        order.deliver_to = validated.deliver_to;
        order.mobile_number = validated.mobile_number;
        order.dishes = validated.dishes;
        order.status = status;

        tracing::info!(order_id, status = %status, "Order updated");
        Ok(OrderOutcome::Updated(order.clone()))
    }

    fn destroy(&mut self, order_id: &str) -> Result<OrderOutcome, OrderError> {
        let index = pipeline::check_delete(&self.store, order_id)?;
        self.store
            .remove(index)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        tracing::info!(order_id, remaining = self.store.len(), "Order deleted");
        Ok(OrderOutcome::Deleted)
    }

    fn list(&self) -> OrderOutcome {
        OrderOutcome::Listed(self.store.all().to_vec())
    }

    fn insert(&mut self, validated: ValidatedOrder) -> Order {
        let order = Order {
            id: self.fresh_id(),
            deliver_to: validated.deliver_to,
            mobile_number: validated.mobile_number,
            status: OrderStatus::Pending,
            dishes: validated.dishes,
        };
        self.store.append(order.clone());
        order
    }

    /// Seeded records may already hold ids the generator would mint.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    fn resolved(&self, index: usize, order_id: &str) -> Result<&Order, OrderError> {
        self.store
            .get(index)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
