use std::sync::Arc;

use crate::config::Settings;
use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub sessions: Arc<dyn SessionStore>,
}
