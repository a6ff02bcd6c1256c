//! Built-in mission catalog.
//!
//! Seven short calming missions a child can complete on any unlocked
//! day. Point values feed the progression ledger; everything else is
//! presentation copy.

use serde::{Deserialize, Serialize};

/// A daily mission as presented to the child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique catalog id (stable, referenced by the completion ledger)
    pub id: String,
    pub title: String,
    /// Points awarded when the mission is completed
    pub points: u32,
    pub duration_min: u32,
    /// One-line rationale shown when the mission card is expanded
    pub why: String,
    /// Benefit tags shown as chips
    pub benefits: Vec<String>,
    /// Icon name understood by the presentation layer
    pub icon: String,
}

fn mission(
    id: &str,
    title: &str,
    points: u32,
    duration_min: u32,
    why: &str,
    benefits: &[&str],
    icon: &str,
) -> Mission {
    Mission {
        id: id.to_string(),
        title: title.to_string(),
        points,
        duration_min,
        why: why.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        icon: icon.to_string(),
    }
}

/// Returns all built-in missions.
pub fn builtin_missions() -> Vec<Mission> {
    vec![
        mission(
            "t1",
            "Dragon Breath",
            10,
            3,
            "Slow breathing cools the worry fire",
            &["Calm", "Courage"],
            "wind",
        ),
        mission(
            "t2",
            "Cat Stretch",
            10,
            5,
            "Shakes the rust out of a sleepy body",
            &["Flexibility", "Energy"],
            "cat",
        ),
        mission(
            "t3",
            "Secret Mission of the Day",
            20,
            5,
            "Puts the hero's mind in order",
            &["Focus", "Planning"],
            "list",
        ),
        mission(
            "t4",
            "Joy Dance",
            40,
            15,
            "Dances the sadness away",
            &["Fun", "Good Sleep"],
            "music",
        ),
        mission(
            "t5",
            "Five Senses Treasure Hunt",
            15,
            3,
            "Brings you back to planet Earth",
            &["Attention", "Control"],
            "eye",
        ),
        mission(
            "t6",
            "Airplane Mode",
            40,
            30,
            "Recharges the battery without screens",
            &["Creativity", "Rest"],
            "wifi-off",
        ),
        mission(
            "t7",
            "Captain's Log",
            10,
            3,
            "Remembers the day's victories",
            &["Gratitude", "Sweet Dreams"],
            "book",
        ),
    ]
}

/// Find a built-in mission by id.
pub fn find_mission(id: &str) -> Option<Mission> {
    builtin_missions().into_iter().find(|m| m.id == id)
}

/// Get mission ids for listing.
pub fn mission_ids() -> Vec<&'static str> {
    vec!["t1", "t2", "t3", "t4", "t5", "t6", "t7"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn all_missions_have_valid_fields() {
        let missions = builtin_missions();
        assert!(!missions.is_empty());

        for m in &missions {
            assert!(!m.id.is_empty());
            assert!(!m.title.is_empty());
            assert!(m.points > 0);
            assert!(m.duration_min > 0);
            assert!(!m.why.is_empty());
            assert!(!m.benefits.is_empty());
            assert!(!m.icon.is_empty());
        }
    }

    #[test]
    fn mission_ids_are_unique() {
        let missions = builtin_missions();
        let unique: BTreeSet<_> = missions.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(unique.len(), missions.len());
    }

    #[test]
    fn mission_ids_match_actual_missions() {
        let ids = mission_ids();
        let missions = builtin_missions();

        assert_eq!(ids.len(), missions.len());
        for id in ids {
            assert!(find_mission(id).is_some(), "Mission {} not found", id);
        }
    }

    #[test]
    fn find_mission_returns_correct_mission() {
        let m = find_mission("t1").unwrap();
        assert_eq!(m.title, "Dragon Breath");
        assert_eq!(m.points, 10);

        assert!(find_mission("nonexistent").is_none());
    }

    #[test]
    fn mission_serialization() {
        let m = find_mission("t3").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let decoded: Mission = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, m);
    }
}
