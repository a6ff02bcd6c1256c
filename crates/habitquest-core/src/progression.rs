//! Pure progression transitions.
//!
//! Every operation takes the current profile value plus caller-injected
//! time and returns a new value. Persistence and notification happen at
//! the engine boundary, which keeps these transitions trivially
//! testable.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::catalog::{find_plan, PlanId};
use crate::error::{CoreError, RegistrationError, Result};
use crate::profile::UserProfile;

/// Outcome of a daily reconciliation.
#[derive(Debug, Clone)]
pub struct DailyOutcome {
    pub profile: UserProfile,
    /// False when the profile was already reconciled for `today`;
    /// callers skip the persistence write in that case.
    pub changed: bool,
}

/// Build a fresh trial profile.
///
/// `name` must be longer than two characters after trimming and
/// `contact` at least eight characters; violations fail before anything
/// is constructed. The trial window closes one day after `now`.
pub fn register_trial(name: &str, contact: &str, now: DateTime<Utc>) -> Result<UserProfile> {
    let name = name.trim();
    if name.chars().count() <= 2 {
        return Err(RegistrationError::NameTooShort.into());
    }
    if contact.chars().count() < 8 {
        return Err(RegistrationError::ContactTooShort.into());
    }

    Ok(UserProfile {
        name: name.to_string(),
        contact: contact.to_string(),
        plan: PlanId::Trial,
        trial_end_date: Some(now + Duration::days(1)),
        points: 0,
        streak: 0,
        last_active_date: now.date_naive(),
        completed_missions: Default::default(),
        unlocked_days: PlanId::Trial.unlock_days(),
    })
}

/// Fold a date change into the profile.
///
/// Same-day calls are a no-op. On a date change the streak advances by
/// one when exactly one day has passed since `last_active_date` and
/// resets to zero on any other gap, including clock rollbacks.
pub fn reconcile_daily(profile: &UserProfile, today: NaiveDate) -> DailyOutcome {
    if profile.last_active_date == today {
        return DailyOutcome {
            profile: profile.clone(),
            changed: false,
        };
    }

    let mut next = profile.clone();
    next.streak = match (today - profile.last_active_date).num_days() {
        1 => profile.streak + 1,
        _ => 0,
    };
    next.last_active_date = today;

    DailyOutcome {
        profile: next,
        changed: true,
    }
}

/// Apply a purchasable plan, overwriting the current one.
///
/// Downgrades are allowed; the only validation is membership in the
/// purchasable plan catalog, so `trial` and arbitrary ids fail with
/// [`CoreError::UnknownPlan`] and leave the profile untouched.
pub fn apply_plan(profile: &UserProfile, plan_id: &str) -> Result<UserProfile> {
    let plan = find_plan(plan_id).ok_or_else(|| CoreError::UnknownPlan(plan_id.to_string()))?;

    let mut next = profile.clone();
    next.plan = plan.id;
    next.unlocked_days = plan.id.unlock_days();
    Ok(next)
}

/// Flip a mission's completion for `today`, adjusting points.
///
/// A strict toggle: completing adds `points`, uncompleting subtracts
/// them saturating at zero. The ledger has no catalog awareness --
/// `points` is whatever the caller read from the catalog at toggle
/// time, and unknown mission ids are accepted.
pub fn toggle_mission(
    profile: &UserProfile,
    mission_id: &str,
    points: u32,
    today: NaiveDate,
) -> UserProfile {
    let mut next = profile.clone();

    let completed = next.completed_missions.entry(today).or_default();
    if completed.remove(mission_id) {
        next.points = next.points.saturating_sub(points);
    } else {
        completed.insert(mission_id.to_string());
        next.points = next.points.saturating_add(points);
    }

    // Dates with no completions carry no ledger entry.
    if next
        .completed_missions
        .get(&today)
        .is_some_and(|ids| ids.is_empty())
    {
        next.completed_missions.remove(&today);
    }

    next
}
