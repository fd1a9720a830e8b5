//! Order status state machine
//!
//! ```text
//! pending → preparing → out-for-delivery → delivered
//!                                          (terminal)
//! cancelled
//! ```
//!
//! Updates may move an order to any of the four delivery states in any
//! direction, except that a delivered order can no longer change. Deletion
//! is only legal while the order is pending.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::core::error::{ApiError, ApiResult};

pub const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";
pub const INVALID_UPDATE_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
pub const INVALID_INITIAL_STATUS: &str =
    "Order status must be one of pending, preparing, out-for-delivery, delivered, cancelled";
pub const DELETE_REQUIRES_PENDING: &str = "An order cannot be deleted unless it is pending.";

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether an update may request this status
    pub fn is_update_target(self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }

    /// No further change is allowed once reached
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    pub fn is_deletable(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

fn requested(payload: &Value) -> Option<&str> {
    payload.get("status").and_then(Value::as_str)
}

/// Status for a newly created order
///
/// A missing status starts the order as pending; any of the five statuses
/// is accepted as given.
pub fn initial_status(payload: &Value) -> ApiResult<OrderStatus> {
    match payload.get("status") {
        None | Some(Value::Null) => Ok(OrderStatus::Pending),
        Some(Value::String(s)) if s.is_empty() => Ok(OrderStatus::Pending),
        Some(_) => requested(payload)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ApiError::validation(INVALID_INITIAL_STATUS)),
    }
}

/// `checkStatus`: gate an update of an order currently in `current`
///
/// A delivered order rejects every update, whatever status is requested.
/// Otherwise the requested status must be one of the four delivery states.
pub fn check_status(current: OrderStatus, payload: &Value) -> ApiResult<OrderStatus> {
    if current.is_terminal() {
        return Err(ApiError::state(DELIVERED_IS_FINAL));
    }

    requested(payload)
        .and_then(|s| s.parse::<OrderStatus>().ok())
        .filter(|status| status.is_update_target())
        .ok_or_else(|| ApiError::state(INVALID_UPDATE_STATUS))
}

/// `checkPending`: gate deletion of an order currently in `current`
pub fn check_pending(current: OrderStatus) -> ApiResult<()> {
    if current.is_deletable() {
        Ok(())
    } else {
        Err(ApiError::state(DELETE_REQUIRES_PENDING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out-for-delivery")
        );
        let parsed: OrderStatus = serde_json::from_value(json!("delivered")).unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_initial_status_defaults_to_pending() {
        assert_eq!(initial_status(&json!({})).unwrap(), OrderStatus::Pending);
        assert_eq!(
            initial_status(&json!({ "status": "" })).unwrap(),
            OrderStatus::Pending
        );
    }

    #[test]
    fn test_initial_status_keeps_caller_value() {
        assert_eq!(
            initial_status(&json!({ "status": "preparing" })).unwrap(),
            OrderStatus::Preparing
        );
        assert_eq!(
            initial_status(&json!({ "status": "cancelled" })).unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn test_initial_status_rejects_unknown() {
        let err = initial_status(&json!({ "status": "shipped" })).unwrap_err();
        assert_eq!(err.to_string(), INVALID_INITIAL_STATUS);
        assert!(initial_status(&json!({ "status": 3 })).is_err());
    }

    #[test]
    fn test_check_status_accepts_any_delivery_state() {
        for current in [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Cancelled,
        ] {
            for target in ["pending", "preparing", "out-for-delivery", "delivered"] {
                let next = check_status(current, &json!({ "status": target })).unwrap();
                assert_eq!(next.as_str(), target);
            }
        }
    }

    #[test]
    fn test_check_status_rejects_invalid_request() {
        for payload in [
            json!({}),
            json!({ "status": "" }),
            json!({ "status": "invalid" }),
            json!({ "status": "cancelled" }),
        ] {
            let err = check_status(OrderStatus::Pending, &payload).unwrap_err();
            assert_eq!(err.to_string(), INVALID_UPDATE_STATUS);
        }
    }

    #[test]
    fn test_delivered_order_cannot_change() {
        for payload in [json!({ "status": "pending" }), json!({ "status": "nope" })] {
            let err = check_status(OrderStatus::Delivered, &payload).unwrap_err();
            assert_eq!(err.to_string(), DELIVERED_IS_FINAL);
        }
    }

    #[test]
    fn test_check_pending() {
        assert!(check_pending(OrderStatus::Pending).is_ok());
        for status in &OrderStatus::ALL[1..] {
            let err = check_pending(*status).unwrap_err();
            assert_eq!(err.to_string(), DELETE_REQUIRES_PENDING);
        }
    }
}
