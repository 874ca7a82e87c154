use crate::backend::BackendClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
