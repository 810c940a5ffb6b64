use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

pub struct PlatformsRepository<'a> {
    conn: &'a Connection,
    now: Box<dyn Fn() -> DateTime<Utc> + 'a>,
}

impl<'a> PlatformsRepository<'a> {
    pub fn new(conn: &'a Connection, now: Box<dyn Fn() -> DateTime<Utc> + 'a>) -> Self {
        PlatformsRepository { conn, now }
    }

    pub fn insert(&self, name: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO platforms (name, created_at) VALUES (?1, ?2)",
            params![name, (self.now)()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, platform_id: i64) -> Result<Option<Platform>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM platforms WHERE id = ?1")?;
        let mut rows = stmt.query([platform_id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(Platform {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            }))
        } else {
            Ok(None)
        }
    }

    pub fn list(&self) -> Result<Vec<Platform>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM platforms ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            Ok(Platform {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM platforms", [], |row| row.get(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connection::open;

    fn create_test_db() -> Connection {
        open(":memory:").expect("Failed to create test database")
    }

    fn repo(conn: &Connection) -> PlatformsRepository<'_> {
        PlatformsRepository::new(conn, Box::new(Utc::now))
    }

    #[test]
    fn test_insert_and_get_platform() {
        let conn = create_test_db();
        let platforms = repo(&conn);

        let id = platforms.insert("LeetCode").unwrap();
        let stored = platforms.get(id).unwrap().unwrap();
        assert_eq!(stored.name, "LeetCode");
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let conn = create_test_db();
        let platforms = repo(&conn);

        platforms.insert("HackerRank").unwrap();
        platforms.insert("Codeforces").unwrap();

        let names: Vec<String> = platforms.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Codeforces", "HackerRank"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let conn = create_test_db();
        let platforms = repo(&conn);

        platforms.insert("LeetCode").unwrap();
        assert!(platforms.insert("LeetCode").is_err());
        assert_eq!(platforms.count().unwrap(), 1);
    }

    #[test]
    fn test_get_nonexistent_platform() {
        let conn = create_test_db();
        assert!(repo(&conn).get(42).unwrap().is_none());
    }
}
