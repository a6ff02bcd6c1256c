//! Profile lifecycle commands.

use chrono::Utc;
use clap::Subcommand;
use habitquest_core::{JsonProfileStore, PlanId};

use super::common;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Register a new trial profile
    Register {
        /// Child or guardian name (longer than 2 characters)
        name: String,
        /// Contact identifier, e.g. a WhatsApp number (8+ characters)
        contact: String,
    },
    /// Show the current profile
    Show {
        /// Print the raw profile record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the stored profile
    Reset,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Register { name, contact } => {
            let engine = common::open_engine()?;
            if engine.load_profile()?.is_some() {
                return Err("A profile already exists. Run 'profile reset' first.".into());
            }

            let profile = engine.register_trial(&name, &contact, Utc::now())?;
            println!("Trial registered for {}.", profile.name);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Show { json } => {
            let engine = common::open_engine()?;
            let profile = common::require_profile(&engine)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                let plan = if profile.plan == PlanId::Trial {
                    let state = if profile.trial_active(Utc::now()) {
                        "active"
                    } else {
                        "expired"
                    };
                    format!("{} ({})", profile.plan, state)
                } else {
                    profile.plan.to_string()
                };
                println!("Name:          {}", profile.name);
                println!("Plan:          {}", plan);
                println!("Points:        {}", profile.points);
                println!("Streak:        {} day(s)", profile.streak);
                println!("Unlocked days: {}", profile.unlocked_days);
                println!("Last active:   {}", profile.last_active_date);
            }
        }
        ProfileAction::Reset => {
            JsonProfileStore::open()?.clear()?;
            println!("Profile removed.");
        }
    }

    Ok(())
}
