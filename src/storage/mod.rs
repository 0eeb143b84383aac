//! Storage Layer - SQLite-backed schema management
//!
//! Managed tables:
//! - system_input_text(id, text_type, text)
//! - api_keys(key_name, key_value)
//! - user_questions(id, question, answer, question_session_id, asked_on)

pub mod schema;
pub mod sqlite;

pub use sqlite::{
    SchemaManager, SchemaStatus, TableStatus, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE,
};
