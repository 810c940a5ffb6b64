use log::debug;
use rusqlite::Connection;
use rusqlite::Result;

refinery::embed_migrations!("migrations");

/// Opens the SQLite database and brings the schema up to date
pub fn open(db_path: &str) -> Result<Connection> {
    let mut conn = Connection::open(db_path)?;

    match migrations::runner().run(&mut conn) {
        Ok(report) => {
            debug!("schema migrations applied: {}", report.applied_migrations().len());
        }
        Err(e) => {
            eprintln!("Schema migration error: {}", e);
            return Err(rusqlite::Error::ExecuteReturnedResults);
        }
    }

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_creates_schema() {
        let conn = open(":memory:").expect("Failed to open in-memory database");
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('platforms', 'questions', 'daily_goals')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }

    #[test]
    fn test_open_is_idempotent_for_migrations() {
        let dir = std::env::temp_dir().join("lazydsa_migration_test.db");
        let path = dir.to_str().unwrap();
        let _ = std::fs::remove_file(path);

        open(path).expect("first open");
        open(path).expect("second open must not re-apply migrations");

        let _ = std::fs::remove_file(path);
    }
}
