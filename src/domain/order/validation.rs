use std::num::NonZeroU64;

use serde_json::Value;

use super::commands::OrderPayload;
use super::errors::OrderError;
use super::value_objects::{Dish, OrderStatus};

// ============================================================================
// Field Validator
// ============================================================================
//
// Stateless checks over a proposed order payload. Each check looks at one
// field and fails with the error naming that field. Nothing here touches the
// store.
//
// ============================================================================

/// Order content that passed every field check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
}

/// Run the content checks in order and stop at the first failure.
pub fn validate_content(payload: &OrderPayload) -> Result<ValidatedOrder, OrderError> {
    let deliver_to = deliver_to(payload)?;
    let mobile_number = mobile_number(payload)?;
    let dishes = dishes_present(payload)?;
    let dishes = dishes_non_empty(dishes)?;
    let dishes = dish_quantities(dishes)?;

    Ok(ValidatedOrder {
        deliver_to,
        mobile_number,
        dishes,
    })
}

pub fn deliver_to(payload: &OrderPayload) -> Result<String, OrderError> {
    non_empty_text(payload.deliver_to.as_ref()).ok_or(OrderError::MissingDeliverTo)
}

pub fn mobile_number(payload: &OrderPayload) -> Result<String, OrderError> {
    non_empty_text(payload.mobile_number.as_ref()).ok_or(OrderError::MissingMobileNumber)
}

/// `null`, `false`, `0` and `""` count as no dishes at all.
pub fn dishes_present(payload: &OrderPayload) -> Result<&Value, OrderError> {
    payload
        .dishes
        .as_ref()
        .filter(|dishes| !is_blank(dishes))
        .ok_or(OrderError::MissingDishes)
}

pub fn dishes_non_empty(dishes: &Value) -> Result<&[Value], OrderError> {
    match dishes.as_array() {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(OrderError::EmptyDishes),
    }
}

/// Every entry needs a positive integer `quantity`; the first offender's
/// 0-based position is reported.
pub fn dish_quantities(items: &[Value]) -> Result<Vec<Dish>, OrderError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| dish(item).ok_or(OrderError::InvalidDishQuantity(index)))
        .collect()
}

/// Status is required wherever this check is part of the chain.
pub fn status(payload: &OrderPayload) -> Result<OrderStatus, OrderError> {
    payload
        .status
        .as_ref()
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse)
        .ok_or(OrderError::InvalidStatus)
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn dish(item: &Value) -> Option<Dish> {
    let fields = item.as_object()?;
    let quantity = positive_integer(fields.get("quantity")?)?;

    let dish = fields
        .iter()
        .filter(|(key, _)| key.as_str() != "quantity")
        .fold(Dish::new(quantity), |dish, (key, value)| {
            dish.with_detail(key.clone(), value.clone())
        });

    Some(dish)
}

/// Integral floats such as `2.0` are accepted as integers.
fn positive_integer(value: &Value) -> Option<NonZeroU64> {
    let number = match value.as_u64() {
        Some(n) => n,
        None => {
            let n = value.as_f64()?;
            if n <= 0.0 || n.fract() != 0.0 || n >= u64::MAX as f64 {
                return None;
            }
            n as u64
        }
    };
    NonZeroU64::new(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> OrderPayload {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "deliverTo": "123 Main",
            "mobileNumber": "555-0100",
            "dishes": [{ "quantity": 2, "name": "Falafel" }]
        })
    }

    #[test]
    fn test_valid_content_passes() {
        let validated = validate_content(&payload(valid())).unwrap();
        assert_eq!(validated.deliver_to, "123 Main");
        assert_eq!(validated.mobile_number, "555-0100");
        assert_eq!(validated.dishes.len(), 1);
        assert_eq!(validated.dishes[0].quantity.get(), 2);
        assert_eq!(validated.dishes[0].details.get("name"), Some(&json!("Falafel")));
        assert!(!validated.dishes[0].details.contains_key("quantity"));
    }

    #[test]
    fn test_missing_or_empty_deliver_to() {
        for value in [json!(null), json!(""), json!(12)] {
            let mut body = valid();
            body["deliverTo"] = value;
            assert_eq!(
                validate_content(&payload(body)),
                Err(OrderError::MissingDeliverTo)
            );
        }
    }

    #[test]
    fn test_missing_or_empty_mobile_number() {
        let mut body = valid();
        body["mobileNumber"] = json!("");
        assert_eq!(
            validate_content(&payload(body)),
            Err(OrderError::MissingMobileNumber)
        );
    }

    #[test]
    fn test_missing_dishes() {
        let mut body = valid();
        body.as_object_mut().unwrap().remove("dishes");
        assert_eq!(validate_content(&payload(body)), Err(OrderError::MissingDishes));
    }

    #[test]
    fn test_blank_dishes_count_as_missing() {
        for value in [json!(""), json!(0), json!(false)] {
            let mut body = valid();
            body["dishes"] = value;
            assert_eq!(validate_content(&payload(body)), Err(OrderError::MissingDishes));
        }
    }

    #[test]
    fn test_dishes_must_be_non_empty_list() {
        for value in [json!([]), json!("Falafel"), json!({ "quantity": 1 })] {
            let mut body = valid();
            body["dishes"] = value;
            assert_eq!(validate_content(&payload(body)), Err(OrderError::EmptyDishes));
        }
    }

    #[test]
    fn test_bad_quantity_reports_first_offending_index() {
        let cases = [
            json!({ "name": "no quantity" }),
            json!({ "quantity": 0 }),
            json!({ "quantity": -3 }),
            json!({ "quantity": "2" }),
            json!({ "quantity": 1.5 }),
            json!("not an object"),
        ];

        for bad in cases {
            let mut body = valid();
            body["dishes"] = json!([{ "quantity": 1 }, bad, { "quantity": 0 }]);
            assert_eq!(
                validate_content(&payload(body)),
                Err(OrderError::InvalidDishQuantity(1))
            );
        }
    }

    #[test]
    fn test_integral_quantities_of_any_size_pass() {
        let mut body = valid();
        body["dishes"] = json!([{ "quantity": 2.0 }, { "quantity": 5_000_000_000u64 }]);

        let validated = validate_content(&payload(body)).unwrap();
        assert_eq!(validated.dishes[0].quantity.get(), 2);
        assert_eq!(validated.dishes[1].quantity.get(), 5_000_000_000);
    }

    #[test]
    fn test_first_failing_check_wins() {
        let body = json!({ "dishes": [] });
        assert_eq!(
            validate_content(&payload(body)),
            Err(OrderError::MissingDeliverTo)
        );
    }

    #[test]
    fn test_status_check() {
        let mut body = valid();
        body["status"] = json!("out-for-delivery");
        assert_eq!(status(&payload(body)), Ok(OrderStatus::OutForDelivery));

        for bad in [json!("invalid"), json!(null), json!(3)] {
            let mut body = valid();
            body["status"] = bad;
            assert_eq!(status(&payload(body)), Err(OrderError::InvalidStatus));
        }
    }
}
