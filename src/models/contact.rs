use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contact-form submission. Immutable once constructed; either persisted
/// as-is or discarded at the end of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a message from validated input, stamping `id` and `created_at`
    /// at receipt time. Neither is ever client-supplied.
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}
