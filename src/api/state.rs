use std::sync::Arc;

use crate::service::TestDataSource;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TestDataSource>,
    pub expose_error_detail: bool,
}
