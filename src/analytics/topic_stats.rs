use crate::question::{Difficulty, Question};
use std::collections::HashMap;

/// Per-topic aggregate over the full snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicStats {
    pub topic: String,
    pub total: u32,
    pub solved: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub unknown: u32,
}

impl TopicStats {
    fn new(topic: &str) -> Self {
        TopicStats {
            topic: topic.to_string(),
            total: 0,
            solved: 0,
            easy: 0,
            medium: 0,
            hard: 0,
            unknown: 0,
        }
    }
}

/// Groups questions by topic and counts totals, solves, and per-difficulty
/// breakdowns (independent of solved status).
///
/// Output is sorted descending by total; ties keep the order topics were
/// first encountered in the snapshot. Accumulation is two-phase: a keyed
/// mapping first, then an explicit sort of the extracted entries.
pub fn topic_stats(questions: &[Question]) -> Vec<TopicStats> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<TopicStats> = Vec::new();

    for q in questions {
        let topic = q.topic_label();
        let slot = *index.entry(topic.to_string()).or_insert_with(|| {
            stats.push(TopicStats::new(topic));
            stats.len() - 1
        });

        let entry = &mut stats[slot];
        entry.total += 1;
        if q.solved {
            entry.solved += 1;
        }
        match q.difficulty {
            Difficulty::Easy => entry.easy += 1,
            Difficulty::Medium => entry.medium += 1,
            Difficulty::Hard => entry.hard += 1,
            Difficulty::Unknown => entry.unknown += 1,
        }
    }

    // Stable sort: entries are in first-encounter order, so equal totals
    // keep that order.
    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats
}
