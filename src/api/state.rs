use std::path::PathBuf;
use std::sync::Arc;

use crate::services::ModelGateway;

/// Shared application state
///
/// Read-only after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ModelGateway>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            gateway,
            static_dir: static_dir.into(),
        }
    }
}
