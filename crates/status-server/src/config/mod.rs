mod settings;

pub use settings::{DatabaseConfig, ServerConfig, SessionConfig, Settings};
