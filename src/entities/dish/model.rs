//! Dish entity model

use serde::{Deserialize, Serialize};

use super::validation::DishDraft;
use crate::core::Entity;

/// A menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Build a new dish from a validated payload
    pub fn from_draft(id: String, draft: DishDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        }
    }

    /// Overwrite every mutable field. The id is kept.
    pub fn apply(&mut self, draft: DishDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.image_url = draft.image_url;
    }
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn resource_name_singular() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
