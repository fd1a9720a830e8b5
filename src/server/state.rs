//! Application state shared across handlers

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::core::{DataService, IdGenerator};
use crate::entities::{Dish, Order};

/// Application state shared across handlers
///
/// `write_gate` serializes every mutating pipeline: a create, update or
/// delete holds it from the first check to the commit, so no two mutations
/// interleave. Reads never take it.
#[derive(Clone)]
pub struct AppState {
    pub dishes: Arc<dyn DataService<Dish>>,
    pub orders: Arc<dyn DataService<Order>>,
    pub ids: Arc<dyn IdGenerator>,
    write_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        dishes: Arc<dyn DataService<Dish>>,
        orders: Arc<dyn DataService<Order>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            dishes,
            orders,
            ids,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Acquire exclusive access for a mutating pipeline
    pub async fn begin_write(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}
