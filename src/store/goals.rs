use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, params};

/// One day's solve target and how far along it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyGoal {
    pub id: i64,
    pub goal_date: NaiveDate,
    pub target_questions: u32,
    pub completed_questions: u32,
    pub is_completed: bool,
}

pub struct GoalsRepository<'a> {
    conn: &'a Connection,
    now: Box<dyn Fn() -> DateTime<Utc> + 'a>,
}

impl<'a> GoalsRepository<'a> {
    pub fn new(conn: &'a Connection, now: Box<dyn Fn() -> DateTime<Utc> + 'a>) -> Self {
        GoalsRepository { conn, now }
    }

    /// Creates or replaces the goal for `date`. Completion is evaluated
    /// against the day's current solve count straight away.
    pub fn set(&self, date: NaiveDate, target: u32, solved_so_far: u32) -> Result<DailyGoal> {
        let stamp = (self.now)();
        self.conn.execute(
            "INSERT INTO daily_goals \
             (goal_date, target_questions, completed_questions, is_completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(goal_date) DO UPDATE SET
                target_questions = excluded.target_questions,
                completed_questions = excluded.completed_questions,
                is_completed = excluded.is_completed,
                updated_at = excluded.updated_at",
            params![
                date,
                target,
                solved_so_far,
                (solved_so_far >= target) as i32,
                stamp,
            ],
        )?;
        self.get(date)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    pub fn get(&self, date: NaiveDate) -> Result<Option<DailyGoal>> {
        self.conn
            .query_row(
                "SELECT id, goal_date, target_questions, completed_questions, is_completed
                 FROM daily_goals WHERE goal_date = ?1",
                params![date],
                |row| {
                    Ok(DailyGoal {
                        id: row.get(0)?,
                        goal_date: row.get(1)?,
                        target_questions: row.get(2)?,
                        completed_questions: row.get(3)?,
                        is_completed: row.get::<_, i32>(4)? != 0,
                    })
                },
            )
            .optional()
    }

    /// Re-evaluates an existing goal against the day's solve count; no-op
    /// when no goal was set for `date`
    pub fn refresh_progress(&self, date: NaiveDate, solved_so_far: u32) -> Result<Option<DailyGoal>> {
        let Some(goal) = self.get(date)? else {
            return Ok(None);
        };

        self.conn.execute(
            "UPDATE daily_goals SET completed_questions = ?1, is_completed = ?2, updated_at = ?3
             WHERE id = ?4",
            params![
                solved_so_far,
                (solved_so_far >= goal.target_questions) as i32,
                (self.now)(),
                goal.id,
            ],
        )?;
        self.get(date)
    }

    pub fn delete(&self, date: NaiveDate) -> Result<()> {
        self.conn
            .execute("DELETE FROM daily_goals WHERE goal_date = ?1", params![date])?;
        Ok(())
    }
}
