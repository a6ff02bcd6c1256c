//! Console stand-in for a real CRM/webhook transport.

use crate::error::NotifyError;
use crate::events::LifecycleEvent;

use super::Notifier;

/// Prints event payloads to stdout.
///
/// Used while no webhook endpoint is configured; the payload printed is
/// exactly what the webhook transport would POST.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&self, event: &LifecycleEvent) -> Result<(), NotifyError> {
        let payload = serde_json::to_string_pretty(event)?;
        println!("[notify] {payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlanId;

    #[test]
    fn emit_always_succeeds() {
        let notifier = ConsoleNotifier;
        let event = LifecycleEvent::PlanUpgrade {
            contact: "11999999999".to_string(),
            plan: PlanId::Days7,
        };

        assert!(notifier.emit(&event).is_ok());
        assert_eq!(notifier.name(), "console");
    }
}
