//! Entity descriptor for Dish

use super::{create_dish, get_dish, list_dishes, update_dish};
use crate::server::router::method_not_allowed;
use crate::server::{AppState, EntityDescriptor};
use axum::{Router, routing::get};

/// Descriptor for the Dish entity
///
/// Dishes are never deleted; `DELETE` falls through to the 405 handler.
pub struct DishDescriptor;

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router<AppState> {
        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dishId}",
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
    }
}
