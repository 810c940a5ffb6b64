use lazydsa::analytics::ProgressAnalyzer;
use lazydsa::cli::{Args, Command, PlatformCommand};
use lazydsa::question::{Difficulty, NewQuestion};
use lazydsa::report;
use lazydsa::store::Store;
use lazydsa::store_factory::{StoreConfig, StoreFactory};
use log::warn;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse_args();

    if args.no_color {
        colored::control::set_override(false);
    }

    let override_date = args.validate_override_date()?;
    let mut builder = StoreConfig::builder().override_date(override_date);
    if args.test {
        builder = builder.test_mode();
    }
    if let Some(path) = &args.db_path {
        builder = builder.path(path.to_string_lossy());
    }
    let store = StoreFactory::create(builder.build())?;

    run_command(&store, &args.command)
}

fn run_command(store: &Store, command: &Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Add {
            topic,
            difficulty,
            platform,
            question_no,
            link,
            description,
        } => {
            let parsed = Difficulty::parse(difficulty);
            if parsed == Difficulty::Unknown {
                warn!(
                    "unrecognized difficulty '{}', storing as '{}'",
                    difficulty,
                    parsed.as_str()
                );
            }
            let id = store.insert_question(&NewQuestion {
                platform_id: *platform,
                question_no: question_no.clone(),
                link: link.clone(),
                description: description.clone(),
                topic: topic.clone(),
                difficulty: parsed,
            })?;
            println!("Added question {} ({}, {})", id, topic, parsed.as_str());
        }
        Command::Solve { id } => {
            require_question(store, *id)?;
            store.mark_question_solved(*id)?;
            if let Some(goal) = store.refresh_goal_progress(solved_today(store)?)? {
                if goal.is_completed {
                    println!("Question {} solved. Daily goal reached!", id);
                    return Ok(());
                }
            }
            println!("Question {} solved", id);
        }
        Command::Unsolve { id } => {
            require_question(store, *id)?;
            store.mark_question_unsolved(*id)?;
            store.refresh_goal_progress(solved_today(store)?)?;
            println!("Question {} marked unsolved", id);
        }
        Command::Remove { id } => {
            require_question(store, *id)?;
            store.delete_question(*id)?;
            println!("Question {} removed", id);
        }
        Command::List => {
            let questions = store.list_questions()?;
            if questions.is_empty() {
                println!("No questions tracked yet.");
                return Ok(());
            }
            for q in questions {
                let marker = if q.solved { "x" } else { " " };
                println!(
                    "[{}] #{:<4} {:<8} {:<20} {}",
                    marker,
                    q.id,
                    q.difficulty.as_str(),
                    q.topic_label(),
                    q.description,
                );
            }
        }
        Command::Platform { action } => match action {
            PlatformCommand::Add { name } => {
                let id = store.insert_platform(name)?;
                println!("Added platform {} ({})", id, name);
            }
            PlatformCommand::List => {
                for platform in store.list_platforms()? {
                    println!("#{:<4} {}", platform.id, platform.name);
                }
            }
        },
        Command::Goal { target } => match target {
            Some(target) => {
                let goal = store.set_daily_goal(*target, solved_today(store)?)?;
                println!(
                    "Goal for {}: {}/{} solved",
                    goal.goal_date, goal.completed_questions, goal.target_questions
                );
            }
            None => match store.daily_goal(store.today())? {
                Some(goal) => println!(
                    "Goal for {}: {}/{} solved",
                    goal.goal_date, goal.completed_questions, goal.target_questions
                ),
                None => println!("No goal set for today."),
            },
        },
        Command::Report { window_days } => {
            let questions = store.list_questions()?;
            let goal = store.daily_goal(store.today())?;
            let rendered =
                report::render_report(&questions, goal.as_ref(), store.today(), *window_days);
            print!("{}", rendered);
        }
    }
    Ok(())
}

fn require_question(store: &Store, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    if store.get_question(id)?.is_none() {
        return Err(format!("Question {} not found", id).into());
    }
    Ok(())
}

fn solved_today(store: &Store) -> Result<u32, Box<dyn std::error::Error>> {
    let questions = store.list_questions()?;
    let overview = ProgressAnalyzer::new(&questions).overview(store.today());
    Ok(overview.solved_today)
}
