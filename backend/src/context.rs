use blog_core::source::PostStore;
use std::sync::Arc;

use crate::config::Config;

pub struct BackendContext {
    pub store: Arc<dyn PostStore>,
    pub config: Config,
}

impl BackendContext {
    pub fn new(store: Arc<dyn PostStore>, config: Config) -> Self {
        Self { store, config }
    }
}
