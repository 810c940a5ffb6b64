use crate::question::{Difficulty, Question};
use std::collections::HashMap;

/// Topics need at least this many attempts before they are judged
pub const MIN_TOPIC_ATTEMPTS: u32 = 2;
/// Accuracy below this marks a difficulty level as a focus area
pub const FOCUS_ACCURACY_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAccuracy {
    pub topic: String,
    pub attempted: u32,
    pub solved: u32,
    /// Rounded percentage, 0 when nothing was attempted
    pub accuracy: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyAccuracy {
    pub difficulty: Difficulty,
    pub attempted: u32,
    pub solved: u32,
    pub accuracy: u32,
}

impl DifficultyAccuracy {
    /// A level the user should practice more: attempted at least once and
    /// solved under the accuracy threshold
    pub fn is_focus_area(&self) -> bool {
        self.attempted >= 1 && self.accuracy < FOCUS_ACCURACY_THRESHOLD
    }
}

fn accuracy_percent(solved: u32, attempted: u32) -> u32 {
    if attempted == 0 {
        0
    } else {
        (solved as f64 / attempted as f64 * 100.0).round() as u32
    }
}

/// Per-topic accuracy, weakest first. Topics with fewer than
/// `MIN_TOPIC_ATTEMPTS` attempts are excluded so a single miss does not
/// dominate the ranking.
pub fn topic_accuracy(questions: &[Question]) -> Vec<TopicAccuracy> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<TopicAccuracy> = Vec::new();

    for q in questions {
        let topic = q.topic_label();
        let slot = *index.entry(topic.to_string()).or_insert_with(|| {
            entries.push(TopicAccuracy {
                topic: topic.to_string(),
                attempted: 0,
                solved: 0,
                accuracy: 0,
            });
            entries.len() - 1
        });
        entries[slot].attempted += 1;
        if q.solved {
            entries[slot].solved += 1;
        }
    }

    let mut entries: Vec<TopicAccuracy> = entries
        .into_iter()
        .filter(|e| e.attempted >= MIN_TOPIC_ATTEMPTS)
        .map(|mut e| {
            e.accuracy = accuracy_percent(e.solved, e.attempted);
            e
        })
        .collect();

    entries.sort_by(|a, b| a.accuracy.cmp(&b.accuracy));
    entries
}

/// Accuracy for each of the three fixed difficulty levels, in display order
pub fn difficulty_accuracy(questions: &[Question]) -> Vec<DifficultyAccuracy> {
    Difficulty::FIXED_LEVELS
        .iter()
        .map(|&difficulty| {
            let attempted = questions.iter().filter(|q| q.difficulty == difficulty);
            let (mut total, mut solved) = (0, 0);
            for q in attempted {
                total += 1;
                if q.solved {
                    solved += 1;
                }
            }
            DifficultyAccuracy {
                difficulty,
                attempted: total,
                solved,
                accuracy: accuracy_percent(solved, total),
            }
        })
        .collect()
}
