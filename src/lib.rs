//! # gamingai-db - database bootstrap for the GamingAI assistant
//!
//! Creates the three tables the assistant stores its data in, optionally
//! dropping them first:
//! - `system_input_text` - named prompt snippets, one per `text_type`
//! - `api_keys` - key/value store for third-party API keys
//! - `user_questions` - log of asked questions and their answers

pub mod storage;
pub mod populate;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use storage::{SchemaManager, SchemaStatus, TableStatus, DEFAULT_DATABASE};
pub use populate::run;

/// Result type alias for gamingai-db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gamingai-db operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
