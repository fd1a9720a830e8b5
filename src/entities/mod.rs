//! Entities module - dishes and orders

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor, DishDraft};
pub use order::{LineItem, Order, OrderDescriptor, OrderDraft, OrderStatus};
