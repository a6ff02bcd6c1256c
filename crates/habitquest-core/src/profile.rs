//! The per-user progression record.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::PlanId;

/// Everything the engine knows about one user.
///
/// Serialized as a single JSON record by the profile store. Day-granular
/// fields (`last_active_date` and the ledger keys) serialize as
/// `YYYY-MM-DD`; `trial_end_date` keeps the full timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Contact identifier used for external correlation (e.g. a
    /// WhatsApp number). Loosely validated at registration.
    pub contact: String,
    pub plan: PlanId,
    /// Set at registration; paid plans carry it over but never expire.
    pub trial_end_date: Option<DateTime<Utc>>,
    /// Total points, floored at zero by the toggle operation.
    pub points: u32,
    /// Consecutive active days.
    pub streak: u32,
    /// Calendar date of the last engine interaction.
    pub last_active_date: NaiveDate,
    /// Per-date set of completed mission ids. Dates with no completions
    /// have no entry.
    #[serde(default)]
    pub completed_missions: BTreeMap<NaiveDate, BTreeSet<String>>,
    /// Highest accessible content day, derived from `plan`.
    pub unlocked_days: u32,
}

impl UserProfile {
    /// Whether content day `day` (1-based) is accessible under the
    /// current plan. The single source of truth for unlock gating.
    pub fn is_day_unlocked(&self, day: u32) -> bool {
        day >= 1 && day <= self.unlocked_days
    }

    /// Mission ids completed on `date`, if any were.
    pub fn completed_on(&self, date: NaiveDate) -> Option<&BTreeSet<String>> {
        self.completed_missions.get(&date)
    }

    /// Whether `mission_id` was completed on `date`.
    pub fn is_completed(&self, date: NaiveDate, mission_id: &str) -> bool {
        self.completed_missions
            .get(&date)
            .is_some_and(|ids| ids.contains(mission_id))
    }

    /// True while a trial profile's window is still open. Paid plans
    /// have no expiry.
    pub fn trial_active(&self, now: DateTime<Utc>) -> bool {
        match (self.plan, self.trial_end_date) {
            (PlanId::Trial, Some(end)) => now < end,
            (PlanId::Trial, None) => false,
            _ => true,
        }
    }

    /// Check the structural invariants of a stored record.
    ///
    /// The profile store treats a violation as a malformed record and
    /// discards it rather than handing it to the engine.
    pub fn validate(&self) -> Result<(), String> {
        if self.unlocked_days != self.plan.unlock_days() {
            return Err(format!(
                "unlocked_days {} does not match plan '{}' (expected {})",
                self.unlocked_days,
                self.plan,
                self.plan.unlock_days()
            ));
        }
        if self.plan == PlanId::Trial && self.trial_end_date.is_none() {
            return Err("trial profile is missing trial_end_date".to_string());
        }
        Ok(())
    }
}
