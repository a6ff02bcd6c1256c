//! Engine orchestration: pure transition, persist, best-effort emit.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use crate::error::{Result, StorageError};
use crate::events::LifecycleEvent;
use crate::notify::Notifier;
use crate::profile::UserProfile;
use crate::progression;
use crate::storage::ProfileStore;

/// Progression engine bound to a persistence store and a notifier.
///
/// Mutating operations are all-or-nothing: validation happens before
/// any write, a failed save surfaces as an error, and the notification
/// path never fails an operation.
pub struct Engine<S, N> {
    store: S,
    notifier: N,
}

impl<S: ProfileStore, N: Notifier> Engine<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// The persisted profile, if any.
    ///
    /// A record that fails to parse or validate is treated the same as
    /// no record at all, so a corrupted file degrades to a fresh start
    /// instead of a hard failure.
    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        match self.store.load() {
            Ok(found) => Ok(found),
            Err(StorageError::Malformed { path, message }) => {
                warn!(path = %path.display(), %message, "discarding malformed stored profile");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Register a new trial profile, persist it, and announce it.
    pub fn register_trial(
        &self,
        name: &str,
        contact: &str,
        now: DateTime<Utc>,
    ) -> Result<UserProfile> {
        let profile = progression::register_trial(name, contact, now)?;
        self.store.save(&profile)?;
        self.emit(LifecycleEvent::NewTrial {
            name: profile.name.clone(),
            contact: profile.contact.clone(),
            date: now,
        });
        Ok(profile)
    }

    /// Fold a date change into the profile.
    ///
    /// Persists only when something changed; same-day calls perform no
    /// write at all.
    pub fn reconcile_daily(&self, profile: &UserProfile, today: NaiveDate) -> Result<UserProfile> {
        let outcome = progression::reconcile_daily(profile, today);
        if outcome.changed {
            self.store.save(&outcome.profile)?;
        }
        Ok(outcome.profile)
    }

    /// Apply a purchasable plan, persist, and announce the upgrade.
    pub fn apply_plan(&self, profile: &UserProfile, plan_id: &str) -> Result<UserProfile> {
        let next = progression::apply_plan(profile, plan_id)?;
        self.store.save(&next)?;
        self.emit(LifecycleEvent::PlanUpgrade {
            contact: next.contact.clone(),
            plan: next.plan,
        });
        Ok(next)
    }

    /// Toggle a mission for `today` and persist the result.
    pub fn toggle_mission(
        &self,
        profile: &UserProfile,
        mission_id: &str,
        points: u32,
        today: NaiveDate,
    ) -> Result<UserProfile> {
        let next = progression::toggle_mission(profile, mission_id, points, today);
        self.store.save(&next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn emit(&self, event: LifecycleEvent) {
        if let Err(e) = self.notifier.emit(&event) {
            warn!(event = event.name(), error = %e, "lifecycle notification failed");
        }
    }
}
