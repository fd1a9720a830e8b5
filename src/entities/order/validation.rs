//! Order validator chain
//!
//! `has_deliver → has_mobile_number → has_dishes → has_quantity`. Status
//! rules are applied separately (see [`super::status`]) because they differ
//! between create and update.

use serde_json::{Map, Value};

use super::model::LineItem;
use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::{non_empty_string, positive_integer};

pub const MISSING_DELIVER_TO: &str = "Order must include a deliverTo";
pub const MISSING_MOBILE_NUMBER: &str = "Order must include a mobileNumber";
pub const MISSING_DISHES: &str = "Order must include a dish";
pub const EMPTY_DISHES: &str = "Order must include at least one dish";

/// `orderIdMatches` message for a body id that disagrees with the route
pub fn id_mismatch(body_id: &str, route_id: &str) -> String {
    format!("Order id does not match route id. Order: {body_id}, Route: {route_id}.")
}

/// An order payload that passed every field check
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<LineItem>,
}

impl OrderDraft {
    /// Run the full chain over a `data` payload
    pub fn validate(payload: &Value) -> ApiResult<Self> {
        let deliver_to = has_deliver(payload)?;
        let mobile_number = has_mobile_number(payload)?;
        let items = has_dishes(payload)?;
        let dishes = has_quantity(items)?;

        Ok(Self {
            deliver_to,
            mobile_number,
            dishes,
        })
    }
}

pub fn has_deliver(payload: &Value) -> ApiResult<String> {
    non_empty_string(payload, "deliverTo", MISSING_DELIVER_TO)
}

pub fn has_mobile_number(payload: &Value) -> ApiResult<String> {
    non_empty_string(payload, "mobileNumber", MISSING_MOBILE_NUMBER)
}

/// `dishes` must be present and a non-empty array
pub fn has_dishes(payload: &Value) -> ApiResult<&[Value]> {
    match payload.get("dishes") {
        None | Some(Value::Null) => Err(ApiError::validation(MISSING_DISHES)),
        Some(Value::Array(items)) if !items.is_empty() => Ok(items.as_slice()),
        Some(_) => Err(ApiError::validation(EMPTY_DISHES)),
    }
}

/// Every line item needs an integer quantity greater than 0
///
/// Halts on the first offending item and reports its index.
pub fn has_quantity(items: &[Value]) -> ApiResult<Vec<LineItem>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> ApiResult<LineItem> {
            let quantity = positive_integer(item.get("quantity")).ok_or_else(|| {
                ApiError::validation(format!(
                    "dish {index} must have a quantity that is an integer greater than 0"
                ))
            })?;
            Ok(line_item(item, quantity))
        })
        .collect()
}

fn line_item(item: &Value, quantity: u64) -> LineItem {
    let mut details: Map<String, Value> = item.as_object().cloned().unwrap_or_default();
    details.remove("quantity");

    // Only string and numeric references are typed; anything else stays as sent
    let dish_id = match details.remove("dishId") {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            details.insert("dishId".to_string(), other);
            None
        }
        None => None,
    };

    LineItem {
        dish_id,
        quantity,
        details,
    }
}
