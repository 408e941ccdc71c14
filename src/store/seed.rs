use std::path::Path;

use anyhow::{Context, Result};

use super::order_store::{InMemoryOrderStore, OrderStore};
use crate::domain::order::Order;

/// Load the initial store contents from a JSON array of orders.
pub fn load_seed(path: &Path) -> Result<InMemoryOrderStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let store = parse_seed(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        orders = store.len(),
        "Loaded seed orders"
    );

    Ok(store)
}

fn parse_seed(raw: &str) -> Result<InMemoryOrderStore> {
    let orders: Vec<Order> = serde_json::from_str(raw)?;
    Ok(InMemoryOrderStore::with_orders(orders)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[test]
    fn test_parse_seed() {
        let raw = r#"[
            {
                "id": "f6069a542257054114138301947672ba",
                "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
                "mobileNumber": "(202) 456-1111",
                "status": "out-for-delivery",
                "dishes": [
                    { "id": "90c3d873684bf381dfab29034b5bba73", "name": "Falafel and tahini bagel", "price": 6, "quantity": 1 }
                ]
            }
        ]"#;

        let store = parse_seed(raw).unwrap();
        assert_eq!(store.len(), 1);
        let order = &store.all()[0];
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.dishes[0].quantity.get(), 1);
        assert_eq!(order.dishes[0].details["price"], 6);
    }

    #[test]
    fn test_parse_seed_rejects_unknown_status() {
        let raw = r#"[{ "id": "1", "deliverTo": "x", "mobileNumber": "y", "status": "lost", "dishes": [{ "quantity": 1 }] }]"#;
        assert!(parse_seed(raw).is_err());
    }

    #[test]
    fn test_parse_seed_rejects_duplicate_ids() {
        let raw = r#"[
            { "id": "1", "deliverTo": "x", "mobileNumber": "y", "status": "pending", "dishes": [{ "quantity": 1 }] },
            { "id": "1", "deliverTo": "x", "mobileNumber": "y", "status": "pending", "dishes": [{ "quantity": 2 }] }
        ]"#;
        assert!(parse_seed(raw).is_err());
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = load_seed(Path::new("/nonexistent/orders-seed.json"));
        assert!(result.is_err());
    }
}
