use chrono::{DateTime, NaiveDate, Utc};

/// Topic label applied when a record carries an empty or whitespace-only topic
pub const UNKNOWN_TOPIC: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Bucket for unrecognized labels, so aggregation stays total-preserving
    Unknown,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unknown => "unknown",
        }
    }

    /// Parses a stored label. Anything outside the three fixed levels maps to
    /// `Unknown` instead of failing.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    /// The three fixed difficulty levels, in display order
    pub const FIXED_LEVELS: [Difficulty; 3] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Unknown
    }
}

/// A tracked practice question, as read back from the store
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub platform_id: Option<i64>,
    pub question_no: String,
    pub link: String,
    pub description: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub solved: bool,
    pub created_at: DateTime<Utc>,
    pub solved_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Calendar day (UTC) this question's activity is attributed to:
    /// `solved_at` when present, else `created_at`. All date-bucketing
    /// computations (streaks, daily histogram) use this single rule.
    pub fn activity_date(&self) -> NaiveDate {
        self.solved_at.unwrap_or(self.created_at).date_naive()
    }

    /// Topic label with empty values collapsed into the `unknown` bucket
    pub fn topic_label(&self) -> &str {
        let trimmed = self.topic.trim();
        if trimmed.is_empty() {
            UNKNOWN_TOPIC
        } else {
            trimmed
        }
    }
}

/// Fields supplied by the caller when inserting a question; the store stamps
/// `id`, `created_at`, and the solved state itself.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub platform_id: Option<i64>,
    pub question_no: String,
    pub link: String,
    pub description: String,
    pub topic: String,
    pub difficulty: Difficulty,
}
