//! Store abstraction for dishes and orders

use crate::core::Entity;
use crate::core::error::{ApiError, ApiResult};
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for managing the records of one resource
///
/// Implementations keep records in insertion order. The pipelines are
/// agnostic to the underlying storage mechanism; callers serialize mutating
/// requests through the write gate in [`AppState`](crate::server::AppState).
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Append a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace the stored entity with the given ID
    ///
    /// Fails if no entity has that ID.
    async fn update(&self, id: &str, entity: T) -> Result<T>;

    /// Delete an entity
    ///
    /// Deleting an unknown ID is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Resolve a route identifier to a stored record
///
/// Halts with a 404 (`"<Resource> does not exist: <id>."`) on a miss.
pub async fn resolve<T: Entity>(service: &dyn DataService<T>, id: &str) -> ApiResult<T> {
    service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(T::resource_name_singular(), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Dish;
    use crate::storage::InMemoryDataService;
    use axum::http::StatusCode;

    fn dish(id: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: "Taco".to_string(),
            description: "spicy".to_string(),
            price: 5,
            image_url: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_hit() {
        let service = InMemoryDataService::with_records(vec![dish("d1")]);
        let found = resolve(&service, "d1").await.unwrap();
        assert_eq!(found, dish("d1"));
    }

    #[tokio::test]
    async fn test_resolve_miss_is_404() {
        let service = InMemoryDataService::<Dish>::new();
        let err = resolve(&service, "nope").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Dish does not exist: nope.");
    }
}
