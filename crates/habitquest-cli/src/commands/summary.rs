//! Daily progress commands.

use chrono::NaiveDate;
use clap::Subcommand;
use habitquest_core::{builtin_missions, daily_summary};

use super::common;

#[derive(Subcommand)]
pub enum SummaryAction {
    /// Show progress for a day
    Show {
        /// Date to summarize, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SummaryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SummaryAction::Show { date, json } => {
            let engine = common::open_engine()?;
            let profile = common::require_profile(&engine)?;

            let date = match date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| format!("Invalid date '{s}': {e}"))?,
                None => common::today(),
            };

            let summary = daily_summary(&profile, &builtin_missions(), date);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{}: {}/{} missions, {} of {} pts ({}%)",
                    summary.date,
                    summary.completed_count,
                    summary.total_count,
                    summary.points_earned,
                    summary.points_available,
                    summary.progress_pct
                );
                println!("Streak: {} day(s)  Total points: {}", profile.streak, profile.points);
            }
        }
    }

    Ok(())
}
