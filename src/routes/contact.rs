use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::ContactMessage;
use crate::state::SharedState;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    pub stored: bool,
}

/// Accept a contact-form submission. Persistence is best-effort: a store
/// failure degrades to `stored: false`, never a 5xx.
pub async fn submit(
    State(state): State<SharedState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    validation::validate_contact(&req)?;

    let message = ContactMessage::new(req.name, req.email, req.message);

    let stored = match &state.store {
        Some(store) => match store.insert_contact(&message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to store contact message {}: {e}", message.id);
                false
            }
        },
        None => false,
    };

    Ok(Json(ContactResponse { ok: true, stored }))
}
