//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Dish and order routes from their entity descriptors
//! - A health check route
//! - 404/405 fallbacks rendered as `{ "error": ... }`

pub mod builder;
pub mod entity_registry;
pub mod router;
pub mod state;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use state::AppState;
