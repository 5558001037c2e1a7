pub mod query;
pub mod settings;

use crate::config::ApiConfig;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<ApiConfig>>,
}
