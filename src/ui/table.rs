use tabled::{settings::Style, Table, Tabled};
use crate::storage::TableStatus;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Table")]
    name: String,
    #[tabled(rename = "Exists")]
    exists: &'static str,
    #[tabled(rename = "Rows")]
    rows: String,
    #[tabled(rename = "Columns")]
    columns: String,
}

impl From<&TableStatus> for StatusRow {
    fn from(status: &TableStatus) -> Self {
        Self {
            name: status.name.clone(),
            exists: if status.exists { "yes" } else { "no" },
            rows: status.row_count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
            columns: status.columns.join(", "),
        }
    }
}

/// Render one row per managed table
pub fn status_table(tables: &[TableStatus]) -> String {
    if tables.is_empty() {
        return String::new();
    }

    let rows: Vec<StatusRow> = tables.iter().map(StatusRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table_renders_rows() {
        let tables = vec![
            TableStatus {
                name: "api_keys".to_string(),
                exists: true,
                row_count: Some(2),
                columns: vec!["key_name".to_string(), "key_value".to_string()],
            },
            TableStatus {
                name: "user_questions".to_string(),
                exists: false,
                row_count: None,
                columns: Vec::new(),
            },
        ];

        let rendered = status_table(&tables);
        assert!(rendered.contains("api_keys"));
        assert!(rendered.contains("key_name, key_value"));
        assert!(rendered.contains("user_questions"));
        assert!(rendered.contains("Exists"));
    }

    #[test]
    fn test_empty_status_table() {
        assert!(status_table(&[]).is_empty());
    }
}
