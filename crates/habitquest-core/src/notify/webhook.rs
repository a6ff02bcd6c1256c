//! Webhook delivery over HTTP.

use reqwest::Client;
use tokio::runtime::Runtime;
use tracing::{debug, warn};
use url::Url;

use crate::error::NotifyError;
use crate::events::LifecycleEvent;

use super::Notifier;

/// POSTs lifecycle events as JSON to a configured endpoint.
///
/// Requests run on a private single-worker runtime; `emit` returns as
/// soon as the request is handed off, and the outcome is only logged.
#[derive(Debug)]
pub struct WebhookNotifier {
    endpoint: Url,
    client: Client,
    runtime: Runtime,
}

impl WebhookNotifier {
    pub fn new(endpoint: &str) -> Result<Self, NotifyError> {
        let endpoint = Url::parse(endpoint).map_err(|e| NotifyError::InvalidEndpoint {
            url: endpoint.to_string(),
            message: e.to_string(),
        })?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(Self {
            endpoint,
            client: Client::new(),
            runtime,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    fn emit(&self, event: &LifecycleEvent) -> Result<(), NotifyError> {
        let payload = serde_json::to_value(event)?;
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let event_name = event.name();

        self.runtime.spawn(async move {
            match client.post(endpoint).json(&payload).send().await {
                Ok(resp) if resp.status().is_success() => {
                    debug!(event = event_name, "lifecycle event delivered");
                }
                Ok(resp) => {
                    warn!(
                        event = event_name,
                        status = %resp.status(),
                        "webhook rejected lifecycle event"
                    );
                }
                Err(e) => {
                    warn!(event = event_name, error = %e, "webhook delivery failed");
                }
            }
        });

        Ok(())
    }
}
