use crate::models::AppData;
use crate::session::ActiveSession;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub session: Arc<Mutex<Option<ActiveSession>>>,
    pub tick_interval: Duration,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, tick_interval: Duration) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            session: Arc::new(Mutex::new(None)),
            tick_interval,
        }
    }
}
