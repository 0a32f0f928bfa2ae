mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, ExportSettings, LoggingSettings, ServerSettings, Settings, StorageBackend,
};
