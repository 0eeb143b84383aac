//! Database schema definitions

/// SQL to create the system_input_text table
pub const CREATE_SYSTEM_INPUT_TEXT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS system_input_text (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text_type TEXT,
    text TEXT,
    UNIQUE(text_type)
)
"#;

/// SQL to create the api_keys table
pub const CREATE_API_KEYS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS api_keys (
    key_name TEXT PRIMARY KEY,
    key_value TEXT
)
"#;

/// SQL to create the user_questions table
/// `asked_on` is filled by SQLite at insert time (UTC)
pub const CREATE_USER_QUESTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user_questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT,
    answer TEXT,
    question_session_id TEXT,
    asked_on DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

pub const SYSTEM_INPUT_TEXT: &str = "system_input_text";
pub const API_KEYS: &str = "api_keys";
pub const USER_QUESTIONS: &str = "user_questions";

/// Every table this crate manages, in creation order
pub const TABLE_NAMES: &[&str] = &[SYSTEM_INPUT_TEXT, API_KEYS, USER_QUESTIONS];

/// All schema creation statements, paired with the table they create
pub fn all_schema_statements() -> Vec<(&'static str, &'static str)> {
    vec![
        (SYSTEM_INPUT_TEXT, CREATE_SYSTEM_INPUT_TEXT_TABLE),
        (API_KEYS, CREATE_API_KEYS_TABLE),
        (USER_QUESTIONS, CREATE_USER_QUESTIONS_TABLE),
    ]
}

/// All drop statements, same order as creation
pub fn all_drop_statements() -> Vec<(&'static str, String)> {
    TABLE_NAMES
        .iter()
        .map(|table| (*table, format!("DROP TABLE IF EXISTS {}", table)))
        .collect()
}

/// Columns each managed table exposes, in declaration order
pub fn expected_columns(table: &str) -> Option<&'static [&'static str]> {
    match table {
        SYSTEM_INPUT_TEXT => Some(&["id", "text_type", "text"]),
        API_KEYS => Some(&["key_name", "key_value"]),
        USER_QUESTIONS => Some(&["id", "question", "answer", "question_session_id", "asked_on"]),
        _ => None,
    }
}
