//! In-memory implementation of DataService

use crate::core::{DataService, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory data service implementation
///
/// Records live in an ordered `Vec`, so `list` returns them in insertion
/// order. Uses an async RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryDataService<T: Entity> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create an empty in-memory data service
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a data service pre-populated with seed records
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::resource_name_singular(),
                entity.id()
            ));
        }

        records.push(entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self.records.read().await;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self.records.read().await;

        Ok(records.clone())
    }

    async fn update(&self, id: &str, entity: T) -> Result<T> {
        let mut records = self.records.write().await;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| anyhow!("{} not found: {}", T::resource_name_singular(), id))?;

        *slot = entity.clone();

        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;

        if let Some(index) = records.iter().position(|r| r.id() == id) {
            records.remove(index);
        }

        Ok(())
    }
}
