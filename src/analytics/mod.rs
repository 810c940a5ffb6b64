pub mod daily_progress;
pub mod difficulty_stats;
pub mod overview;
pub mod streak;
pub mod topic_stats;
pub mod weakness;

use crate::question::Question;
use chrono::NaiveDate;

pub use daily_progress::{DEFAULT_WINDOW_DAYS, DailyProgress};
pub use difficulty_stats::{DifficultyCount, DifficultyStats};
pub use overview::Overview;
pub use streak::StreakSummary;
pub use topic_stats::TopicStats;
pub use weakness::{DifficultyAccuracy, TopicAccuracy};

/// Progress analytics over an immutable snapshot of question records.
///
/// Every operation is a pure function of the snapshot plus an explicit
/// `today`; nothing here reads the clock, blocks, or mutates its input.
pub struct ProgressAnalyzer<'a> {
    questions: &'a [Question],
}

impl<'a> ProgressAnalyzer<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        ProgressAnalyzer { questions }
    }

    pub fn topic_stats(&self) -> Vec<TopicStats> {
        topic_stats::topic_stats(self.questions)
    }

    pub fn daily_progress(&self, today: NaiveDate, window_days: u32) -> Vec<DailyProgress> {
        daily_progress::daily_progress(self.questions, today, window_days)
    }

    pub fn streaks(&self, today: NaiveDate) -> StreakSummary {
        streak::streaks(self.questions, today)
    }

    pub fn difficulty_stats(&self) -> DifficultyStats {
        difficulty_stats::difficulty_stats(self.questions)
    }

    pub fn topic_accuracy(&self) -> Vec<TopicAccuracy> {
        weakness::topic_accuracy(self.questions)
    }

    pub fn difficulty_accuracy(&self) -> Vec<DifficultyAccuracy> {
        weakness::difficulty_accuracy(self.questions)
    }

    pub fn overview(&self, today: NaiveDate) -> Overview {
        overview::overview(self.questions, today)
    }
}
