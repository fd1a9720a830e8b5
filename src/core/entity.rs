//! Entity trait defining the core abstraction for stored records

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for every record kept in a [`DataService`](crate::core::DataService).
///
/// Records are identified by an opaque string id assigned at creation. The
/// singular resource name is the one used in client-facing messages
/// (`"Dish does not exist: ..."`).
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes", "orders")
    fn resource_name() -> &'static str;

    /// The singular, capitalized resource name (e.g., "Dish", "Order")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;
}
