use crate::analytics::ProgressAnalyzer;
use crate::question::{Difficulty, Question};
use crate::store::DailyGoal;
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

/// Percentage of `part` in `whole`; a zero `whole` yields 0, never NaN
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn level_label(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => "easy".green(),
        Difficulty::Medium => "medium".yellow(),
        Difficulty::Hard => "hard".red(),
        Difficulty::Unknown => "unknown".normal(),
    }
}

fn heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!("{}\n", title.bold()));
    out.push_str(&format!("{}\n", "-".repeat(title.len())));
}

/// Renders the full progress report over a snapshot. `today` comes from the
/// injected clock; the caller decides where the text goes.
pub fn render_report(
    questions: &[Question],
    goal: Option<&DailyGoal>,
    today: NaiveDate,
    window_days: u32,
) -> String {
    if questions.is_empty() {
        return "No questions tracked yet.\n".to_string();
    }

    let analyzer = ProgressAnalyzer::new(questions);
    let overview = analyzer.overview(today);
    let streaks = analyzer.streaks(today);

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Progress Report".bold()));
    out.push_str("===============\n\n");

    out.push_str(&format!(
        "Total: {} questions, {} solved ({:.1}%)\n",
        overview.total_questions,
        overview.total_solved,
        percentage(overview.total_solved, overview.total_questions),
    ));
    out.push_str(&format!(
        "This month: {} solved    Today: {} solved\n",
        overview.solved_this_month, overview.solved_today,
    ));
    out.push_str(&format!(
        "Current streak: {}    Longest streak: {}\n",
        format!("{} days", streaks.current).yellow(),
        format!("{} days", streaks.longest).yellow(),
    ));

    render_goal(&mut out, goal, overview.solved_today);
    render_daily_window(&mut out, &analyzer, today, window_days);
    render_topics(&mut out, &analyzer);
    render_difficulties(&mut out, &analyzer);
    render_weakness(&mut out, &analyzer);

    out
}

fn render_goal(out: &mut String, goal: Option<&DailyGoal>, solved_today: u32) {
    heading(out, "Daily goal");
    match goal {
        Some(goal) => {
            let done = solved_today;
            let status = if done >= goal.target_questions {
                "reached".green()
            } else {
                "in progress".yellow()
            };
            out.push_str(&format!(
                "  {}/{} solved today ({})\n",
                done, goal.target_questions, status
            ));
        }
        None => out.push_str("  No goal set for today.\n"),
    }
}

fn render_daily_window(
    out: &mut String,
    analyzer: &ProgressAnalyzer,
    today: NaiveDate,
    window_days: u32,
) {
    heading(out, &format!("Last {} days", window_days));
    for day in analyzer.daily_progress(today, window_days) {
        let bar = "#".repeat(day.count.min(40) as usize);
        out.push_str(&format!(
            "  {}  {:>2}  {}\n",
            day.date,
            day.count,
            bar.cyan()
        ));
    }
}

fn render_topics(out: &mut String, analyzer: &ProgressAnalyzer) {
    heading(out, "By topic");
    for topic in analyzer.topic_stats() {
        out.push_str(&format!(
            "  {:<20} total {:>3}  solved {:>3} ({:.1}%)  easy/medium/hard {}/{}/{}\n",
            topic.topic,
            topic.total,
            topic.solved,
            percentage(topic.solved, topic.total),
            topic.easy,
            topic.medium,
            topic.hard,
        ));
    }
}

fn render_difficulties(out: &mut String, analyzer: &ProgressAnalyzer) {
    heading(out, "By difficulty");
    let stats = analyzer.difficulty_stats();
    for level in Difficulty::FIXED_LEVELS {
        let count = stats.level(level);
        out.push_str(&format!(
            "  {:<7} {}/{} solved ({:.1}%)\n",
            level_label(level),
            count.solved,
            count.total,
            percentage(count.solved, count.total),
        ));
    }
    if stats.unknown.total > 0 {
        out.push_str(&format!(
            "  {:<7} {}/{} solved\n",
            level_label(Difficulty::Unknown),
            stats.unknown.solved,
            stats.unknown.total,
        ));
    }
}

fn render_weakness(out: &mut String, analyzer: &ProgressAnalyzer) {
    let weak_topics = analyzer.topic_accuracy();
    if weak_topics.is_empty() {
        return;
    }

    heading(out, "Areas to improve");
    for topic in weak_topics.iter().take(3) {
        out.push_str(&format!(
            "  {:<20} {:>3}%  ({} of {} solved)\n",
            topic.topic, topic.accuracy, topic.solved, topic.attempted,
        ));
    }

    let focus: Vec<String> = analyzer
        .difficulty_accuracy()
        .into_iter()
        .filter(|level| level.is_focus_area())
        .map(|level| level.difficulty.as_str().to_string())
        .collect();
    if !focus.is_empty() {
        out.push_str(&format!(
            "  Focus: {} problems are below {}% accuracy\n",
            focus.join(" and "),
            crate::analytics::weakness::FOCUS_ACCURACY_THRESHOLD,
        ));
    }
}
