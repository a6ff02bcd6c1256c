use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::PlanId;

/// Profile lifecycle changes that external systems care about.
/// Delivery is best-effort; a failed emission never rolls back the
/// profile mutation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A new trial profile was registered.
    NewTrial {
        name: String,
        contact: String,
        date: DateTime<Utc>,
    },
    /// A purchasable plan was applied to an existing profile.
    PlanUpgrade { contact: String, plan: PlanId },
}

impl LifecycleEvent {
    /// Wire name of the event, as it appears in the serialized payload.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::NewTrial { .. } => "new_trial",
            LifecycleEvent::PlanUpgrade { .. } => "plan_upgrade",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_trial_payload_shape() {
        let event = LifecycleEvent::NewTrial {
            name: "Ana".to_string(),
            contact: "11999999999".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "new_trial");
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["contact"], "11999999999");
        assert_eq!(value["date"], "2024-01-01T12:00:00Z");
    }

    #[test]
    fn plan_upgrade_payload_shape() {
        let event = LifecycleEvent::PlanUpgrade {
            contact: "11999999999".to_string(),
            plan: PlanId::Days14,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "plan_upgrade");
        assert_eq!(value["plan"], "14days");
    }

    #[test]
    fn event_roundtrip() {
        let event = LifecycleEvent::PlanUpgrade {
            contact: "11988887777".to_string(),
            plan: PlanId::Days30,
        };

        let json = serde_json::to_string(&event).unwrap();
        let decoded: LifecycleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }
}
