//! Validation building blocks
//!
//! Field-level checks shared by the dish and order validator chains. The
//! chains themselves live next to their models (`entities::*::validation`).

pub mod validators;

pub use validators::{id_matches, non_empty_string, positive_integer};
