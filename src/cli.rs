use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Coding-practice progress tracker
#[derive(Parser, Debug, Clone)]
#[command(name = "lazydsa")]
#[command(about = "Track practice questions and report solve progress", long_about = None)]
#[command(version)]
pub struct Args {
    /// Use in-memory database for testing
    #[arg(long, help = "Use in-memory database for testing")]
    pub test: bool,

    /// Custom database file path
    #[arg(long, value_name = "PATH", help = "Use custom database file path")]
    pub db_path: Option<PathBuf>,

    /// Override current date for testing (YYYY-MM-DD format)
    #[arg(
        long,
        value_name = "DATE",
        help = "Override current date (YYYY-MM-DD format)"
    )]
    pub override_date: Option<String>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Track a new question
    Add {
        /// Topic label, e.g. "Arrays"
        #[arg(long)]
        topic: String,
        /// easy, medium or hard
        #[arg(long)]
        difficulty: String,
        /// Platform id the question belongs to
        #[arg(long)]
        platform: Option<i64>,
        /// Question number on the platform
        #[arg(long, default_value = "")]
        question_no: String,
        /// Link to the problem statement
        #[arg(long, default_value = "")]
        link: String,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Mark a question solved
    Solve { id: i64 },
    /// Mark a question unsolved again
    Unsolve { id: i64 },
    /// Remove a question
    Remove { id: i64 },
    /// List tracked questions
    List,
    /// Register a practice platform
    Platform {
        #[command(subcommand)]
        action: PlatformCommand,
    },
    /// Set or show today's solve goal
    Goal {
        /// Number of questions to solve today; omit to show the goal
        target: Option<u32>,
    },
    /// Render the progress report
    Report {
        /// Width of the daily histogram in days
        #[arg(long, default_value_t = crate::analytics::DEFAULT_WINDOW_DAYS)]
        window_days: u32,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlatformCommand {
    /// Add a platform by name
    Add { name: String },
    /// List registered platforms
    List,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the override_date argument if provided
    pub fn validate_override_date(&self) -> Result<Option<NaiveDate>, String> {
        match &self.override_date {
            Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    format!(
                        "Invalid date format for --override-date: '{}'. Expected YYYY-MM-DD",
                        date_str
                    )
                }),
            None => Ok(None),
        }
    }
}
