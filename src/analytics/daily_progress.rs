use crate::question::Question;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Width of the recent-activity histogram shown by the report
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub count: u32,
}

/// Fixed-length daily solve histogram: exactly `window_days` entries, one per
/// calendar day, ascending, ending at `today` inclusive. Days without solves
/// report 0.
pub fn daily_progress(
    questions: &[Question],
    today: NaiveDate,
    window_days: u32,
) -> Vec<DailyProgress> {
    let mut by_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for q in questions.iter().filter(|q| q.solved) {
        *by_day.entry(q.activity_date()).or_insert(0) += 1;
    }

    let mut window = Vec::with_capacity(window_days as usize);
    for offset in (0..window_days as i64).rev() {
        let date = today - Duration::days(offset);
        window.push(DailyProgress {
            date,
            count: by_day.get(&date).copied().unwrap_or(0),
        });
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{
        date, question, solved_question, solved_without_timestamp,
    };
    use crate::question::Difficulty;

    #[test]
    fn test_window_has_exact_length_even_when_empty() {
        let window = daily_progress(&[], date("2024-01-31"), DEFAULT_WINDOW_DAYS);
        assert_eq!(window.len(), 30);
        assert!(window.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_window_is_ascending_and_gap_free() {
        let window = daily_progress(&[], date("2024-03-15"), 10);
        assert_eq!(window.first().unwrap().date, date("2024-03-06"));
        assert_eq!(window.last().unwrap().date, date("2024-03-15"));
        for pair in window.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_counts_land_on_their_solve_day() {
        let questions = vec![
            solved_question("Arrays", Difficulty::Easy, "2024-01-10"),
            solved_question("Arrays", Difficulty::Easy, "2024-01-10"),
            solved_question("Trees", Difficulty::Hard, "2024-01-12"),
        ];

        let window = daily_progress(&questions, date("2024-01-12"), 5);
        let counts: Vec<u32> = window.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![0, 0, 2, 0, 1]);
    }

    #[test]
    fn test_unsolved_questions_do_not_count() {
        let questions = vec![question("Arrays", Difficulty::Easy, "2024-01-10")];
        let window = daily_progress(&questions, date("2024-01-10"), 3);
        assert!(window.iter().all(|d| d.count == 0));
    }

    #[test]
    fn test_solved_without_timestamp_buckets_by_created_at() {
        let questions = vec![solved_without_timestamp(
            "Arrays",
            Difficulty::Easy,
            "2024-02-01",
        )];

        let window = daily_progress(&questions, date("2024-02-03"), 5);
        let hit = window.iter().find(|d| d.date == date("2024-02-01")).unwrap();
        assert_eq!(hit.count, 1);
    }

    #[test]
    fn test_solves_outside_the_window_are_dropped() {
        let questions = vec![solved_question("Arrays", Difficulty::Easy, "2024-01-01")];
        let window = daily_progress(&questions, date("2024-03-01"), 7);
        assert!(window.iter().all(|d| d.count == 0));
    }
}
