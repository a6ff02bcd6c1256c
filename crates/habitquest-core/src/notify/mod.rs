//! Notification gateway: best-effort delivery of lifecycle events.

mod console;
mod webhook;

pub use console::ConsoleNotifier;
pub use webhook::WebhookNotifier;

use crate::error::NotifyError;
use crate::events::LifecycleEvent;

/// Transport for lifecycle events.
///
/// Delivery is best-effort telemetry: callers log failures and move
/// on, and implementations must not block the caller on network I/O.
pub trait Notifier: Send + Sync {
    /// Short transport identifier (e.g. "webhook", "console").
    fn name(&self) -> &str;

    /// Hand off one event for delivery.
    fn emit(&self, event: &LifecycleEvent) -> Result<(), NotifyError>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn emit(&self, event: &LifecycleEvent) -> Result<(), NotifyError> {
        (**self).emit(event)
    }
}

/// Notifier that drops every event. Used when notifications are
/// disabled and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn name(&self) -> &str {
        "null"
    }

    fn emit(&self, _event: &LifecycleEvent) -> Result<(), NotifyError> {
        Ok(())
    }
}
