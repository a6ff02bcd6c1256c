//! Purchasable plans and the plan-to-days unlock table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Closed set of plan identifiers.
///
/// `Trial` is granted at registration only; the other three are sold on
/// the pricing surface. Wire names match the serialized profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanId {
    #[serde(rename = "trial")]
    Trial,
    #[serde(rename = "7days")]
    Days7,
    #[serde(rename = "14days")]
    Days14,
    #[serde(rename = "30days")]
    Days30,
}

impl PlanId {
    /// Number of content days the plan unlocks.
    ///
    /// Single authority for the plan-to-days mapping; a profile's
    /// `unlocked_days` must always agree with this table.
    pub fn unlock_days(&self) -> u32 {
        match self {
            PlanId::Trial => 1,
            PlanId::Days7 => 7,
            PlanId::Days14 => 14,
            PlanId::Days30 => 30,
        }
    }

    /// Wire identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Trial => "trial",
            PlanId::Days7 => "7days",
            PlanId::Days14 => "14days",
            PlanId::Days30 => "30days",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trial" => Ok(PlanId::Trial),
            "7days" => Ok(PlanId::Days7),
            "14days" => Ok(PlanId::Days14),
            "30days" => Ok(PlanId::Days30),
            other => Err(CoreError::UnknownPlan(other.to_string())),
        }
    }
}

/// A purchasable plan as shown on the pricing surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub id: PlanId,
    pub name: String,
    /// Display price; payment itself happens outside this library.
    pub price: String,
    pub currency: String,
    pub unlock_days: u32,
    /// Marks the plan pushed hardest on the pricing surface.
    pub highlight: bool,
    pub description: String,
}

/// Returns the purchasable plans. The trial is not for sale and is not
/// listed here.
pub fn builtin_plans() -> Vec<PlanConfig> {
    vec![adventurer_plan(), treasure_chest_plan(), zen_master_plan()]
}

/// Find a purchasable plan by wire id.
pub fn find_plan(id: &str) -> Option<PlanConfig> {
    builtin_plans().into_iter().find(|p| p.id.as_str() == id)
}

/// Purchasable plan ids for listing.
pub fn plan_ids() -> Vec<&'static str> {
    vec!["7days", "14days", "30days"]
}

/// One week of missions to start the journey.
fn adventurer_plan() -> PlanConfig {
    PlanConfig {
        id: PlanId::Days7,
        name: "Adventurer Pack".to_string(),
        price: "17.90".to_string(),
        currency: "BRL".to_string(),
        unlock_days: PlanId::Days7.unlock_days(),
        highlight: false,
        description: "A first week of missions".to_string(),
    }
}

/// Two weeks; the plan the pricing page pushes.
fn treasure_chest_plan() -> PlanConfig {
    PlanConfig {
        id: PlanId::Days14,
        name: "Treasure Chest".to_string(),
        price: "47.90".to_string(),
        currency: "BRL".to_string(),
        unlock_days: PlanId::Days14.unlock_days(),
        highlight: true,
        description: "The heroes' favorite".to_string(),
    }
}

/// The full thirty-day journey.
fn zen_master_plan() -> PlanConfig {
    PlanConfig {
        id: PlanId::Days30,
        name: "Zen Master".to_string(),
        price: "67.00".to_string(),
        currency: "BRL".to_string(),
        unlock_days: PlanId::Days30.unlock_days(),
        highlight: false,
        description: "The complete journey".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_table_is_fixed() {
        assert_eq!(PlanId::Trial.unlock_days(), 1);
        assert_eq!(PlanId::Days7.unlock_days(), 7);
        assert_eq!(PlanId::Days14.unlock_days(), 14);
        assert_eq!(PlanId::Days30.unlock_days(), 30);
    }

    #[test]
    fn plan_ids_match_actual_plans() {
        let ids = plan_ids();
        let plans = builtin_plans();

        assert_eq!(ids.len(), plans.len());
        for id in ids {
            assert!(find_plan(id).is_some(), "Plan {} not found", id);
        }
    }

    #[test]
    fn trial_is_not_purchasable() {
        assert!(find_plan("trial").is_none());
    }

    #[test]
    fn find_plan_rejects_unknown_id() {
        assert!(find_plan("100days").is_none());
        assert!(find_plan("").is_none());
    }

    #[test]
    fn plan_catalog_is_consistent() {
        for plan in builtin_plans() {
            assert!(!plan.name.is_empty());
            assert!(!plan.description.is_empty());
            assert_eq!(plan.unlock_days, plan.id.unlock_days());
            assert_eq!(plan.currency, "BRL");
        }
    }

    #[test]
    fn exactly_one_highlighted_plan() {
        let highlighted = builtin_plans().iter().filter(|p| p.highlight).count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn wire_names_roundtrip() {
        for id in [PlanId::Trial, PlanId::Days7, PlanId::Days14, PlanId::Days30] {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            let decoded: PlanId = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, id);
            assert_eq!(id.as_str().parse::<PlanId>().unwrap(), id);
        }
    }

    #[test]
    fn parse_rejects_unknown_plan() {
        let err = "unknown-plan".parse::<PlanId>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownPlan(ref id) if id == "unknown-plan"));
    }
}
