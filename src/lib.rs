pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, persist_data, resolve_data_path};
