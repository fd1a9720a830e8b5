//! Assembly of stores, id generator and routes into a runnable app

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::router::build_api_routes;
use super::state::AppState;
use crate::config::SeedConfig;
use crate::core::{DataService, IdGenerator, RandomHexId};
use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor};
use crate::storage::InMemoryDataService;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the GrubDash HTTP server
///
/// Dish and order routes are always registered. Stores default to empty
/// in-memory services and ids to [`RandomHexId`].
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_seed(config.seed)
///     .build()?;
/// ```
pub struct ServerBuilder {
    dish_service: Option<Arc<dyn DataService<Dish>>>,
    order_service: Option<Arc<dyn DataService<Order>>>,
    id_generator: Arc<dyn IdGenerator>,
    entity_registry: EntityRegistry,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the dish and order descriptors registered
    pub fn new() -> Self {
        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(DishDescriptor));
        entity_registry.register(Box::new(OrderDescriptor));

        Self {
            dish_service: None,
            order_service: None,
            id_generator: Arc::new(RandomHexId),
            entity_registry,
        }
    }

    /// Set the dish store
    pub fn with_dish_service(mut self, service: impl DataService<Dish> + 'static) -> Self {
        self.dish_service = Some(Arc::new(service));
        self
    }

    /// Set the order store
    pub fn with_order_service(mut self, service: impl DataService<Order> + 'static) -> Self {
        self.order_service = Some(Arc::new(service));
        self
    }

    /// Use in-memory stores pre-populated with seed records
    pub fn with_seed(self, seed: SeedConfig) -> Self {
        self.with_dish_service(InMemoryDataService::with_records(seed.dishes))
            .with_order_service(InMemoryDataService::with_records(seed.orders))
    }

    /// Replace the identifier generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(ids);
        self
    }

    /// Register an additional entity descriptor
    pub fn register(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Build the shared application state
    pub fn build_state(&mut self) -> AppState {
        let dishes = self
            .dish_service
            .take()
            .unwrap_or_else(|| {
                Arc::new(InMemoryDataService::<Dish>::new()) as Arc<dyn DataService<Dish>>
            });
        let orders = self
            .order_service
            .take()
            .unwrap_or_else(|| {
                Arc::new(InMemoryDataService::<Order>::new()) as Arc<dyn DataService<Order>>
            });

        AppState::new(dishes, orders, self.id_generator.clone())
    }

    /// Build the router with state and tracing attached
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state();

        tracing::debug!(routes = ?self.entity_registry.collection_paths(), "registering routes");

        Ok(build_api_routes(&self.entity_registry, state))
    }

    /// Bind `addr` and serve until Ctrl+C or SIGTERM
    ///
    /// In-flight requests finish before this returns.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!(%addr, "grubdash listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("grubdash stopped");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!(signal = "SIGINT", "shutting down");
        },
        _ = terminate => {
            tracing::info!(signal = "SIGTERM", "shutting down");
        },
    }
}
