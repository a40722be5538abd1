pub mod postgres;

use async_trait::async_trait;

use crate::models::ContactMessage;

/// Failure while talking to the external store. Always handled at the call
/// site: the contact endpoint folds it into `stored: false`, the diagnostic
/// endpoint into a status string. It never crosses the HTTP boundary.
#[derive(Debug)]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError {
            message: err.to_string(),
        }
    }
}

/// The external document store, treated as opaque. Handlers hold it as
/// `Option<Arc<dyn Store>>` and must tolerate both its absence and any
/// error it returns.
#[async_trait]
pub trait Store: Send + Sync {
    /// Logical database name, if the backend exposes one.
    fn name(&self) -> Option<&str>;

    /// Insert one contact message into the contact collection.
    async fn insert_contact(&self, message: &ContactMessage) -> Result<(), StoreError>;

    /// Names of the collections in the store.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;
}
