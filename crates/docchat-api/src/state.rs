use std::sync::Arc;
use docchat_engine::RagEngine;
use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The engine owns every piece of thread state; handlers only hold this
/// read-only bundle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<dyn RagEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: Arc<dyn RagEngine>) -> Self {
        Self {
            config: Arc::new(config),
            engine,
        }
    }
}
