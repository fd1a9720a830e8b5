//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod status;
pub mod validation;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{LineItem, Order};
pub use status::OrderStatus;
pub use validation::OrderDraft;
