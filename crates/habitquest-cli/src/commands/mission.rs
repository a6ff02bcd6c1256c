//! Daily mission commands.

use clap::Subcommand;
use habitquest_core::{builtin_missions, find_mission};

use super::common;

#[derive(Subcommand)]
pub enum MissionAction {
    /// List the missions for a content day
    List {
        /// Content day to list (1-based; default: 1)
        #[arg(long, default_value = "1")]
        day: u32,
        /// Print the mission catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a mission's completion for today
    Toggle {
        /// Mission id (e.g. t1)
        id: String,
    },
    /// Show which content days are unlocked
    Days,
}

pub fn run(action: MissionAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = common::open_engine()?;

    match action {
        MissionAction::List { day, json } => {
            let profile = common::require_profile(&engine)?;

            if !profile.is_day_unlocked(day) {
                println!(
                    "Day {} is locked (plan '{}' unlocks {} day(s)). Unlock more with 'plan apply'.",
                    day, profile.plan, profile.unlocked_days
                );
                return Ok(());
            }

            let missions = builtin_missions();
            if json {
                println!("{}", serde_json::to_string_pretty(&missions)?);
                return Ok(());
            }

            let today = common::today();
            println!("Day {} missions:", day);
            for m in &missions {
                let mark = if profile.is_completed(today, &m.id) {
                    "x"
                } else {
                    " "
                };
                println!(
                    "  [{}] {:<4} {} (+{} pts, {} min)",
                    mark, m.id, m.title, m.points, m.duration_min
                );
            }
        }
        MissionAction::Toggle { id } => {
            let profile = common::require_profile(&engine)?;

            // The ledger itself accepts any id; the catalog check lives
            // here, on the calling side.
            let mission =
                find_mission(&id).ok_or_else(|| format!("Unknown mission id: {id}"))?;

            let today = common::today();
            let updated = engine.toggle_mission(&profile, &mission.id, mission.points, today)?;

            if updated.is_completed(today, &mission.id) {
                println!("Completed '{}' (+{} pts).", mission.title, mission.points);
            } else {
                println!("Uncompleted '{}' (-{} pts).", mission.title, mission.points);
            }
            println!("Points: {}", updated.points);
        }
        MissionAction::Days => {
            let profile = common::require_profile(&engine)?;

            for day in 1..=30u32 {
                let state = if profile.is_day_unlocked(day) {
                    "unlocked"
                } else {
                    "locked"
                };
                println!("Day {:>2}: {}", day, state);
            }
        }
    }

    Ok(())
}
