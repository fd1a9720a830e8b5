//! Dish validator chain
//!
//! `has_name → has_description → has_price → has_image`. The first failing
//! check halts the chain.

use serde_json::Value;

use crate::core::error::{ApiError, ApiResult};
use crate::core::validation::{non_empty_string, positive_integer};

pub const MISSING_NAME: &str = "Dish must include a name";
pub const MISSING_DESCRIPTION: &str = "Dish must include a description";
pub const INVALID_PRICE: &str = "Dish must have a price that is an integer greater than 0";
pub const MISSING_IMAGE: &str = "Dish must include a image_url";

/// `dishIdMatches` message for a body id that disagrees with the route
pub fn id_mismatch(body_id: &str, route_id: &str) -> String {
    format!("Dish id does not match route id. Dish: {body_id}, Route: {route_id}")
}

/// A dish payload that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl DishDraft {
    /// Run the full chain over a `data` payload
    pub fn validate(payload: &Value) -> ApiResult<Self> {
        let name = has_name(payload)?;
        let description = has_description(payload)?;
        let price = has_price(payload)?;
        let image_url = has_image(payload)?;

        Ok(Self {
            name,
            description,
            price,
            image_url,
        })
    }
}

pub fn has_name(payload: &Value) -> ApiResult<String> {
    non_empty_string(payload, "name", MISSING_NAME)
}

pub fn has_description(payload: &Value) -> ApiResult<String> {
    non_empty_string(payload, "description", MISSING_DESCRIPTION)
}

pub fn has_price(payload: &Value) -> ApiResult<u64> {
    positive_integer(payload.get("price")).ok_or_else(|| ApiError::validation(INVALID_PRICE))
}

pub fn has_image(payload: &Value) -> ApiResult<String> {
    non_empty_string(payload, "image_url", MISSING_IMAGE)
}
