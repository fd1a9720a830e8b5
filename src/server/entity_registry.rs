//! Route assembly from per-resource descriptors

use axum::Router;
use std::collections::BTreeMap;

use super::state::AppState;

/// A resource that contributes routes to the API
///
/// Descriptors return stateless routers; [`AppState`] is attached once, after
/// every descriptor has been merged.
pub trait EntityDescriptor: Send + Sync {
    /// Singular resource name, e.g. `"order"`
    fn entity_type(&self) -> &str;

    /// Collection segment, e.g. `"orders"`
    fn plural(&self) -> &str;

    /// Path of the collection route
    fn collection_path(&self) -> String {
        format!("/{}", self.plural())
    }

    /// Collection and item routes, each with a 405 fallback
    fn build_routes(&self) -> Router<AppState>;
}

/// Descriptors keyed by resource name
///
/// Iteration follows the key order, so the merged router is the same on
/// every start.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor, replacing any earlier one for the same resource
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let key = descriptor.entity_type().to_string();
        if self.descriptors.insert(key, descriptor).is_some() {
            tracing::warn!("entity descriptor replaced");
        }
    }

    /// Merge the routes of every descriptor
    pub fn build_routes(&self) -> Router<AppState> {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Collection paths, in merge order
    pub fn collection_paths(&self) -> Vec<String> {
        self.descriptors
            .values()
            .map(|descriptor| descriptor.collection_path())
            .collect()
    }
}
