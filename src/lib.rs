//! # GrubDash
//!
//! A REST API for dishes and orders built on axum.
//!
//! Every mutating request runs a fixed chain of checks before anything is
//! committed:
//!
//! - **Validator chain**: field presence and type rules over the `data` payload
//! - **Resolver**: route id to stored record, or 404
//! - **Consistency check**: body `id`, when present, must equal the route id
//! - **Order state machine**: `pending → preparing → out-for-delivery → delivered`;
//!   delivered orders are frozen and only pending orders can be deleted
//!
//! The first failing step halts the request with a classified [`ApiError`](core::ApiError);
//! a rejected request never modifies the store.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load()?;
//!     ServerBuilder::new()
//!         .with_seed(config.seed.clone())
//!         .serve(&config.bind_addr())
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        ApiError, ApiResult, DataEnvelope, DataService, Entity, Envelope, IdGenerator,
        RandomHexId, resolve,
    };

    // === Entities ===
    pub use crate::entities::{
        Dish, DishDescriptor, DishDraft, LineItem, Order, OrderDescriptor, OrderDraft,
        OrderStatus,
    };

    // === Storage ===
    pub use crate::storage::InMemoryDataService;

    // === Config ===
    pub use crate::config::{AppConfig, SeedConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
