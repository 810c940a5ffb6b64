use crate::question::Question;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Consecutive-day solve streaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    /// Run of streak-days ending at today or yesterday; 0 once broken
    pub current: u32,
    /// Longest run of consecutive streak-days anywhere in history
    pub longest: u32,
}

/// Computes current and longest solve streaks as of `today`.
///
/// A streak-day is any calendar day with at least one solved record, dated by
/// the activity-date rule. Same-day duplicates collapse via the uniqueness
/// step; input order is irrelevant because dates are sorted here.
pub fn streaks(questions: &[Question], today: NaiveDate) -> StreakSummary {
    let unique: HashSet<NaiveDate> = questions
        .iter()
        .filter(|q| q.solved)
        .map(|q| q.activity_date())
        .collect();

    if unique.is_empty() {
        return StreakSummary::default();
    }

    let mut dates: Vec<NaiveDate> = unique.into_iter().collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let yesterday = today - Duration::days(1);
    let mut current = 0;
    if dates[0] == today || dates[0] == yesterday {
        current = 1;
        for pair in dates.windows(2) {
            if pair[0] - pair[1] == Duration::days(1) {
                current += 1;
            } else {
                break;
            }
        }
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if pair[0] - pair[1] == Duration::days(1) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    StreakSummary { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{
        date, question, solved_question, solved_without_timestamp,
    };
    use crate::question::Difficulty;

    fn solved(days: &[&str]) -> Vec<Question> {
        days.iter()
            .map(|d| solved_question("Arrays", Difficulty::Easy, d))
            .collect()
    }

    #[test]
    fn test_no_solved_records_means_no_streak() {
        let summary = streaks(&[], date("2024-01-03"));
        assert_eq!(summary, StreakSummary::default());

        let unsolved = vec![question("Arrays", Difficulty::Easy, "2024-01-03")];
        let summary = streaks(&unsolved, date("2024-01-03"));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 0);
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let questions = solved(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let summary = streaks(&questions, date("2024-01-03"));
        assert_eq!(summary.current, 3);
        assert_eq!(summary.longest, 3);
    }

    #[test]
    fn test_gap_resets_the_current_streak() {
        let questions = solved(&["2024-01-01", "2024-01-03"]);
        let summary = streaks(&questions, date("2024-01-03"));
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 1);
    }

    #[test]
    fn test_streak_ending_yesterday_still_counts() {
        let questions = solved(&["2024-01-01", "2024-01-02"]);
        let summary = streaks(&questions, date("2024-01-03"));
        assert_eq!(summary.current, 2);
    }

    #[test]
    fn test_stale_streak_does_not_count_down() {
        // Last activity two days ago: current is 0, history still counts
        let questions = solved(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let summary = streaks(&questions, date("2024-01-05"));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 3);
    }

    #[test]
    fn test_longest_tracks_an_older_run() {
        let questions = solved(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-10",
        ]);
        let summary = streaks(&questions, date("2024-01-10"));
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 4);
    }

    #[test]
    fn test_duplicate_same_day_solves_collapse() {
        let questions = solved(&["2024-01-02", "2024-01-02", "2024-01-03"]);
        let summary = streaks(&questions, date("2024-01-03"));
        assert_eq!(summary.current, 2);
        assert_eq!(summary.longest, 2);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let shuffled = solved(&["2024-01-03", "2024-01-01", "2024-01-02"]);
        let summary = streaks(&shuffled, date("2024-01-03"));
        assert_eq!(summary.current, 3);
    }

    #[test]
    fn test_solved_without_timestamp_uses_created_at() {
        let questions = vec![solved_without_timestamp(
            "Arrays",
            Difficulty::Easy,
            "2024-02-01",
        )];
        let summary = streaks(&questions, date("2024-02-01"));
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 1);
    }

    #[test]
    fn test_longest_is_never_below_current() {
        let questions = solved(&["2024-01-06", "2024-01-07", "2024-01-08"]);
        let summary = streaks(&questions, date("2024-01-08"));
        assert!(summary.longest >= summary.current);
    }
}
