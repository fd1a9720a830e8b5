//! Core module containing the traits and request-pipeline building blocks

pub mod entity;
pub mod error;
pub mod extractors;
pub mod id;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{ApiError, ApiResult};
pub use extractors::{DataEnvelope, Envelope};
pub use id::{IdGenerator, RandomHexId};
pub use service::{DataService, resolve};
