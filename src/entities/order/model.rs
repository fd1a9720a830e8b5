//! Order entity model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::status::OrderStatus;
use super::validation::OrderDraft;
use crate::core::Entity;

/// One dish in an order
///
/// `dishId` is a back-reference to a dish, not an ownership link. Any other
/// display fields sent by the client (name, price, ...) are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

impl Order {
    /// Build a new order from a validated payload
    pub fn from_draft(id: String, draft: OrderDraft, status: OrderStatus) -> Self {
        Self {
            id,
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            status,
            dishes: draft.dishes,
        }
    }

    /// Overwrite every mutable field. The id is kept.
    pub fn apply(&mut self, draft: OrderDraft, status: OrderStatus) {
        self.deliver_to = draft.deliver_to;
        self.mobile_number = draft.mobile_number;
        self.status = status;
        self.dishes = draft.dishes;
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
