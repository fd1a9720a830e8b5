//! Identifier generation for new records

use uuid::Uuid;

/// Produces a fresh, never reused identifier per call
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Default generator: 16 random bytes rendered as 32 lowercase hex characters
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHexId;

impl IdGenerator for RandomHexId {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
