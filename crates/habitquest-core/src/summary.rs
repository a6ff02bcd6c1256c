//! Per-day progress read-model derived from the ledger and the catalog.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Mission;
use crate::profile::UserProfile;

/// Snapshot of one day's progress, as shown on the dashboard surface.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Catalog missions completed on `date`.
    pub completed_count: usize,
    pub total_count: usize,
    pub points_earned: u32,
    pub points_available: u32,
    /// 0-100, rounded to the nearest integer.
    pub progress_pct: u8,
}

/// Compute the progress snapshot for `date`.
///
/// Only catalog missions count; ledger entries for ids outside
/// `missions` are ignored here.
pub fn daily_summary(profile: &UserProfile, missions: &[Mission], date: NaiveDate) -> DailySummary {
    let completed: Vec<&Mission> = missions
        .iter()
        .filter(|m| profile.is_completed(date, &m.id))
        .collect();

    let points_earned = completed.iter().map(|m| m.points).sum();
    let points_available = missions.iter().map(|m| m.points).sum();
    let completed_count = completed.len();
    let total_count = missions.len();
    let progress_pct = if total_count == 0 {
        0
    } else {
        ((completed_count as f64 / total_count as f64) * 100.0).round() as u8
    };

    DailySummary {
        date,
        completed_count,
        total_count,
        points_earned,
        points_available,
        progress_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_missions;
    use crate::progression::{register_trial, toggle_mission};
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn empty_day_has_zero_progress() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let profile = register_trial("Ana", "11999999999", now).unwrap();

        let summary = daily_summary(&profile, &builtin_missions(), day(1));
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.total_count, 7);
        assert_eq!(summary.points_earned, 0);
        assert_eq!(summary.points_available, 145);
        assert_eq!(summary.progress_pct, 0);
    }

    #[test]
    fn progress_tracks_completions() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let missions = builtin_missions();
        let mut profile = register_trial("Ana", "11999999999", now).unwrap();
        profile = toggle_mission(&profile, "t1", 10, day(1));
        profile = toggle_mission(&profile, "t3", 20, day(1));

        let summary = daily_summary(&profile, &missions, day(1));
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.points_earned, 30);
        // 2/7 rounds to 29%.
        assert_eq!(summary.progress_pct, 29);
    }

    #[test]
    fn unknown_ledger_entries_are_ignored() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut profile = register_trial("Ana", "11999999999", now).unwrap();
        profile = toggle_mission(&profile, "ghost", 50, day(1));

        let summary = daily_summary(&profile, &builtin_missions(), day(1));
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.points_earned, 0);
    }

    #[test]
    fn summary_is_per_date() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let missions = builtin_missions();
        let mut profile = register_trial("Ana", "11999999999", now).unwrap();
        profile = toggle_mission(&profile, "t1", 10, day(1));

        let other_day = daily_summary(&profile, &missions, day(2));
        assert_eq!(other_day.completed_count, 0);
    }

    #[test]
    fn empty_catalog_yields_zero_percent() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let profile = register_trial("Ana", "11999999999", now).unwrap();

        let summary = daily_summary(&profile, &[], day(1));
        assert_eq!(summary.progress_pct, 0);
        assert_eq!(summary.points_available, 0);
    }
}
