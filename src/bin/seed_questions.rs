use chrono::{Duration, Utc};
use lazydsa::date_provider::OverrideDateProvider;
use lazydsa::question::{Difficulty, NewQuestion};
use lazydsa::store::Store;
use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::sync::Arc;

const TOPICS: [&str; 6] = [
    "Arrays",
    "Strings",
    "Dynamic Programming",
    "Graphs",
    "Trees",
    "Binary Search",
];

const LEVELS: [Difficulty; 3] = Difficulty::FIXED_LEVELS;

/// Populates a database with a plausible two-week practice history so the
/// report has something to show.
fn main() {
    let args: Vec<String> = env::args().collect();
    let db_path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "/tmp/lazydsa_seed.db".to_string());

    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let mut platform_id = None;

    for offset in (0..14).rev() {
        let day = today - Duration::days(offset);
        let store = match Store::with_date_provider(
            &db_path,
            Arc::new(OverrideDateProvider::new(day)),
        ) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error opening database: {}", e);
                std::process::exit(1);
            }
        };

        if platform_id.is_none() {
            // Reuse the platform when seeding into an existing database
            let existing = store
                .list_platforms()
                .expect("Failed to list platforms")
                .into_iter()
                .find(|p| p.name == "LeetCode")
                .map(|p| p.id);
            platform_id = existing.or_else(|| {
                Some(
                    store
                        .insert_platform("LeetCode")
                        .expect("Failed to seed platform"),
                )
            });
        }

        for _ in 0..rng.gen_range(0..4) {
            let topic = TOPICS.choose(&mut rng).unwrap();
            let difficulty = LEVELS.choose(&mut rng).unwrap();
            let id = store
                .insert_question(&NewQuestion {
                    platform_id,
                    question_no: rng.gen_range(1..3000).to_string(),
                    link: String::new(),
                    description: format!("{} practice", topic),
                    topic: topic.to_string(),
                    difficulty: *difficulty,
                })
                .expect("Failed to seed question");

            if rng.gen_bool(0.7) {
                store
                    .mark_question_solved(id)
                    .expect("Failed to mark seeded question solved");
            }
        }
    }

    println!("Seeded sample practice history into {}", db_path);
}
