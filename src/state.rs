use std::sync::Arc;

use crate::config::Config;
use crate::store::Store;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Absent when DATABASE_URL is unset or the handle could not be built.
    pub store: Option<Arc<dyn Store>>,
    pub config: Config,
}
