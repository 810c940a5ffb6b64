use crate::question::Question;
use chrono::{Datelike, NaiveDate};

/// Headline counters for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overview {
    pub total_questions: u32,
    pub total_solved: u32,
    /// Solves dated on or after the first day of the current month
    pub solved_this_month: u32,
    pub solved_today: u32,
}

pub fn overview(questions: &[Question], today: NaiveDate) -> Overview {
    let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .unwrap_or(today);

    let mut summary = Overview {
        total_questions: questions.len() as u32,
        ..Overview::default()
    };

    for q in questions.iter().filter(|q| q.solved) {
        summary.total_solved += 1;
        let day = q.activity_date();
        if day >= month_start {
            summary.solved_this_month += 1;
        }
        if day == today {
            summary.solved_today += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{date, question, solved_question};
    use crate::question::Difficulty;

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        assert_eq!(overview(&[], date("2024-01-15")), Overview::default());
    }

    #[test]
    fn test_month_boundary() {
        let questions = vec![
            solved_question("Arrays", Difficulty::Easy, "2024-01-31"),
            solved_question("Arrays", Difficulty::Easy, "2024-02-01"),
            solved_question("Arrays", Difficulty::Easy, "2024-02-10"),
        ];

        let summary = overview(&questions, date("2024-02-10"));
        assert_eq!(summary.total_solved, 3);
        assert_eq!(summary.solved_this_month, 2);
        assert_eq!(summary.solved_today, 1);
    }

    #[test]
    fn test_unsolved_questions_only_raise_the_total() {
        let questions = vec![
            question("Arrays", Difficulty::Easy, "2024-02-10"),
            solved_question("Trees", Difficulty::Medium, "2024-02-10"),
        ];

        let summary = overview(&questions, date("2024-02-10"));
        assert_eq!(summary.total_questions, 2);
        assert_eq!(summary.total_solved, 1);
        assert_eq!(summary.solved_today, 1);
    }
}
