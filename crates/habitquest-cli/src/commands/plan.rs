//! Plan listing and upgrade commands.

use clap::Subcommand;
use habitquest_core::builtin_plans;

use super::common;

#[derive(Subcommand)]
pub enum PlanAction {
    /// List purchasable plans
    List {
        /// Print the plan catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a purchased plan to the profile
    Apply {
        /// Plan id: 7days, 14days or 30days
        id: String,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::List { json } => {
            let plans = builtin_plans();
            if json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
                return Ok(());
            }

            for plan in &plans {
                let marker = if plan.highlight { " *" } else { "" };
                println!(
                    "{:<8} {} -- {} {} ({} days){}",
                    plan.id.as_str(),
                    plan.name,
                    plan.price,
                    plan.currency,
                    plan.unlock_days,
                    marker
                );
                println!("         {}", plan.description);
            }
        }
        PlanAction::Apply { id } => {
            let engine = common::open_engine()?;
            let profile = common::require_profile(&engine)?;

            let updated = engine.apply_plan(&profile, &id)?;
            println!(
                "Plan '{}' applied. {} content days unlocked.",
                updated.plan, updated.unlocked_days
            );
        }
    }

    Ok(())
}
