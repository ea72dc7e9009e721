use tokio::sync::Mutex;

use crate::core::AppConfig;
use crate::session::Session;

pub struct AppState {
    // The single in-memory session. Handlers hold it across await points
    // (notification send, completion call), hence tokio's Mutex.
    pub session: Mutex<Session>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Mutex::new(Session::new(&config)),
            config,
        }
    }
}
