use crate::question::{Difficulty, Question};

/// Attempted/solved tally for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyCount {
    pub total: u32,
    pub solved: u32,
}

/// Full-input tallies per difficulty level, independent of topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyStats {
    pub easy: DifficultyCount,
    pub medium: DifficultyCount,
    pub hard: DifficultyCount,
    /// Records whose stored difficulty label parsed to no fixed level
    pub unknown: DifficultyCount,
}

impl DifficultyStats {
    pub fn level(&self, difficulty: Difficulty) -> DifficultyCount {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Unknown => self.unknown,
        }
    }
}

pub fn difficulty_stats(questions: &[Question]) -> DifficultyStats {
    let mut stats = DifficultyStats::default();
    for q in questions {
        let count = match q.difficulty {
            Difficulty::Easy => &mut stats.easy,
            Difficulty::Medium => &mut stats.medium,
            Difficulty::Hard => &mut stats.hard,
            Difficulty::Unknown => &mut stats.unknown,
        };
        count.total += 1;
        if q.solved {
            count.solved += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{question, solved_question};

    #[test]
    fn test_empty_input_is_all_zero() {
        let stats = difficulty_stats(&[]);
        for level in Difficulty::FIXED_LEVELS {
            assert_eq!(stats.level(level), DifficultyCount::default());
        }
    }

    #[test]
    fn test_counts_per_level() {
        let questions = vec![
            solved_question("Arrays", Difficulty::Easy, "2024-01-01"),
            question("Arrays", Difficulty::Easy, "2024-01-02"),
            question("Arrays", Difficulty::Medium, "2024-01-03"),
        ];

        let stats = difficulty_stats(&questions);
        assert_eq!(stats.easy, DifficultyCount { total: 2, solved: 1 });
        assert_eq!(stats.medium, DifficultyCount { total: 1, solved: 0 });
        assert_eq!(stats.hard, DifficultyCount::default());
    }

    #[test]
    fn test_unknown_bucket_preserves_totals() {
        let questions = vec![
            question("Bits", Difficulty::Unknown, "2024-01-01"),
            solved_question("Bits", Difficulty::Hard, "2024-01-02"),
        ];

        let stats = difficulty_stats(&questions);
        assert_eq!(stats.unknown, DifficultyCount { total: 1, solved: 0 });
        let total = stats.easy.total + stats.medium.total + stats.hard.total + stats.unknown.total;
        assert_eq!(total as usize, questions.len());
    }
}
