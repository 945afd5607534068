use rota_core::clock::SystemClock;
use rota_core::config::Config;
use rota_core::service::ScheduleService;
use rota_core::store::FileStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state passed to all route handlers.
///
/// The schedule service is not internally synchronized, so every
/// handler takes the single mutex for the duration of its operation.
/// That serializes mutations, which is the consistency model the
/// engine requires.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<ScheduleService<FileStore, SystemClock>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.data_file.clone());
        let service = ScheduleService::new(store, SystemClock, config);
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}
