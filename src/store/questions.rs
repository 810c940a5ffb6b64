use crate::question::{Difficulty, NewQuestion, Question};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, Row, params};

pub struct QuestionsRepository<'a> {
    conn: &'a Connection,
    now: Box<dyn Fn() -> DateTime<Utc> + 'a>,
}

impl<'a> QuestionsRepository<'a> {
    pub fn new(conn: &'a Connection, now: Box<dyn Fn() -> DateTime<Utc> + 'a>) -> Self {
        QuestionsRepository { conn, now }
    }

    fn from_row(row: &Row) -> rusqlite::Result<Question> {
        Ok(Question {
            id: row.get(0)?,
            platform_id: row.get(1)?,
            question_no: row.get(2)?,
            link: row.get(3)?,
            description: row.get(4)?,
            topic: row.get(5)?,
            difficulty: Difficulty::parse(&row.get::<_, String>(6)?),
            solved: row.get::<_, i32>(7)? != 0,
            created_at: row.get(8)?,
            solved_at: row.get(9)?,
        })
    }

    const COLUMNS: &'static str = "id, platform_id, question_no, link, description, topic, \
         difficulty, solved, created_at, solved_at";

    pub fn insert(&self, question: &NewQuestion) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO questions (platform_id, question_no, link, description, topic, \
             difficulty, solved, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)",
            params![
                question.platform_id,
                question.question_no,
                question.link,
                question.description,
                question.topic,
                question.difficulty.as_str(),
                (self.now)(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, question_id: i64) -> Result<Option<Question>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM questions WHERE id = ?1",
            Self::COLUMNS
        ))?;
        let mut rows = stmt.query([question_id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(Self::from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Full snapshot consumed by the analyzer
    pub fn list(&self) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM questions ORDER BY id",
            Self::COLUMNS
        ))?;
        let rows = stmt.query_map([], |row| Self::from_row(row))?;
        rows.collect()
    }

    /// Sets the solved flag and stamps `solved_at`. `created_at` is never
    /// touched after insert.
    pub fn mark_solved(&self, question_id: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE questions SET solved = 1, solved_at = ?1 WHERE id = ?2",
            params![(self.now)(), question_id],
        )?;
        Ok(())
    }

    pub fn mark_unsolved(&self, question_id: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE questions SET solved = 0, solved_at = NULL WHERE id = ?1",
            params![question_id],
        )?;
        Ok(())
    }

    pub fn delete(&self, question_id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM questions WHERE id = ?1", params![question_id])?;
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
    }
}
