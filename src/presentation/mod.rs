pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod validation;

pub use config::{Environment, ExportSettings, Settings, StorageBackend};
pub use router::create_router;
pub use state::AppState;
