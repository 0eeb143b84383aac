use std::path::Path;
use gamingai_db::storage::{schema, SchemaManager};
use gamingai_db::{populate, Error};
use rusqlite::{params, Connection};
use tempfile::TempDir;

fn snapshot(path: &Path, table: &str) -> Vec<String> {
    let conn = Connection::open(path).unwrap();
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {} ORDER BY rowid", table))
        .unwrap();
    let width = stmt.column_count();
    stmt.query_map([], |row| {
        let mut cells = Vec::with_capacity(width);
        for i in 0..width {
            let value: rusqlite::types::Value = row.get(i)?;
            cells.push(format!("{:?}", value));
        }
        Ok(cells.join("|"))
    })
    .unwrap()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
}

#[test]
fn fresh_file_gets_three_empty_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t1.db");
    assert!(!path.exists());

    populate::run(false, Some(path.as_path())).unwrap();

    assert!(path.exists());
    let status = SchemaManager::new(&path).inspect().unwrap();
    assert!(status.is_complete());
    assert_eq!(status.tables.len(), 3);
    for table in &status.tables {
        assert_eq!(table.row_count, Some(0), "{} not empty", table.name);
    }
}

#[test]
fn reset_run_empties_populated_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t2.db");
    populate::run(false, Some(path.as_path())).unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO user_questions (question, answer, question_session_id) VALUES (?1, ?2, ?3)",
        params!["how do I parry?", "press block on impact", "abc-123"],
    )
    .unwrap();
    drop(conn);

    populate::run(true, Some(path.as_path())).unwrap();

    let status = SchemaManager::new(&path).inspect().unwrap();
    let questions = status.table(schema::USER_QUESTIONS).unwrap();
    assert!(questions.exists);
    assert_eq!(questions.row_count, Some(0));
}

#[test]
fn repeated_run_leaves_contents_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t3.db");
    populate::run(false, Some(path.as_path())).unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO system_input_text (text_type, text) VALUES ('persona', 'You are a gaming coach.')",
        [],
    )
    .unwrap();
    conn.execute("INSERT INTO api_keys (key_name, key_value) VALUES ('twitch', 'tok')", [])
        .unwrap();
    drop(conn);

    let before: Vec<Vec<String>> = schema::TABLE_NAMES.iter().map(|t| snapshot(&path, t)).collect();
    populate::run(false, Some(path.as_path())).unwrap();
    let after: Vec<Vec<String>> = schema::TABLE_NAMES.iter().map(|t| snapshot(&path, t)).collect();

    assert_eq!(before, after);
}

#[test]
fn duplicate_text_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unique.db");
    populate::run(false, Some(path.as_path())).unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO system_input_text (text_type, text) VALUES ('rules', 'one')",
        [],
    )
    .unwrap();
    let err = conn
        .execute(
            "INSERT INTO system_input_text (text_type, text) VALUES ('rules', 'two')",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("UNIQUE"));
}

#[test]
fn api_key_names_are_primary_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keys.db");
    populate::run(false, Some(path.as_path())).unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute("INSERT INTO api_keys (key_name, key_value) VALUES ('steam', 'a')", [])
        .unwrap();
    assert!(conn
        .execute("INSERT INTO api_keys (key_name, key_value) VALUES ('steam', 'b')", [])
        .is_err());
}

#[test]
fn unwritable_path_propagates_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("x.db");

    let err = populate::run(false, Some(path.as_path())).unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
}
