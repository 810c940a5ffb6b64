pub mod connection;
pub mod goals;
pub mod platforms;
pub mod questions;

use crate::date_provider::{DateProvider, SystemDateProvider};
use crate::question::{NewQuestion, Question};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, Result};
use std::sync::Arc;

pub use goals::{DailyGoal, GoalsRepository};
pub use platforms::{Platform, PlatformsRepository};
pub use questions::QuestionsRepository;

/// Record store behind which the analyzer only ever sees immutable
/// `Vec<Question>` snapshots. Owns the connection and the injected clock.
pub struct Store {
    pub conn: Connection,
    date_provider: Arc<dyn DateProvider>,
}

impl Store {
    pub fn new(db_path: &str) -> Result<Self> {
        Self::init(db_path, Arc::new(SystemDateProvider))
    }

    pub fn with_date_provider(db_path: &str, date_provider: Arc<dyn DateProvider>) -> Result<Self> {
        Self::init(db_path, date_provider)
    }

    fn init(db_path: &str, date_provider: Arc<dyn DateProvider>) -> Result<Self> {
        let conn = connection::open(db_path)?;
        Ok(Store {
            conn,
            date_provider,
        })
    }

    fn now(&self) -> DateTime<Utc> {
        self.date_provider.now()
    }

    /// UTC calendar day the store considers "today"
    pub fn today(&self) -> NaiveDate {
        self.date_provider.today()
    }

    // ===== Platforms =====

    pub fn insert_platform(&self, name: &str) -> Result<i64> {
        let stamp = self.now();
        let repo = PlatformsRepository::new(&self.conn, Box::new(move || stamp));
        repo.insert(name)
    }

    pub fn get_platform(&self, platform_id: i64) -> Result<Option<Platform>> {
        let repo = PlatformsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.get(platform_id)
    }

    pub fn list_platforms(&self) -> Result<Vec<Platform>> {
        let repo = PlatformsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.list()
    }

    pub fn count_platforms(&self) -> Result<i64> {
        let repo = PlatformsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.count()
    }

    // ===== Questions =====

    pub fn insert_question(&self, question: &NewQuestion) -> Result<i64> {
        let stamp = self.now();
        let repo = QuestionsRepository::new(&self.conn, Box::new(move || stamp));
        repo.insert(question)
    }

    pub fn get_question(&self, question_id: i64) -> Result<Option<Question>> {
        let repo = QuestionsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.get(question_id)
    }

    /// Snapshot for the analyzer and the report
    pub fn list_questions(&self) -> Result<Vec<Question>> {
        let repo = QuestionsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.list()
    }

    pub fn mark_question_solved(&self, question_id: i64) -> Result<()> {
        let stamp = self.now();
        let repo = QuestionsRepository::new(&self.conn, Box::new(move || stamp));
        repo.mark_solved(question_id)
    }

    pub fn mark_question_unsolved(&self, question_id: i64) -> Result<()> {
        let repo = QuestionsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.mark_unsolved(question_id)
    }

    pub fn delete_question(&self, question_id: i64) -> Result<()> {
        let repo = QuestionsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.delete(question_id)
    }

    pub fn count_questions(&self) -> Result<i64> {
        let repo = QuestionsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.count()
    }

    // ===== Daily goals =====

    pub fn set_daily_goal(&self, target: u32, solved_today: u32) -> Result<DailyGoal> {
        let stamp = self.now();
        let repo = GoalsRepository::new(&self.conn, Box::new(move || stamp));
        repo.set(self.today(), target, solved_today)
    }

    pub fn daily_goal(&self, date: NaiveDate) -> Result<Option<DailyGoal>> {
        let repo = GoalsRepository::new(&self.conn, Box::new(|| self.now()));
        repo.get(date)
    }

    pub fn refresh_goal_progress(&self, solved_today: u32) -> Result<Option<DailyGoal>> {
        let stamp = self.now();
        let repo = GoalsRepository::new(&self.conn, Box::new(move || stamp));
        repo.refresh_progress(self.today(), solved_today)
    }
}
