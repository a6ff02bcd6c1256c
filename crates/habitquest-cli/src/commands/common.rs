//! Shared plumbing for CLI commands.

use chrono::{NaiveDate, Utc};
use habitquest_core::{
    Config, ConsoleNotifier, Engine, JsonProfileStore, Notifier, NullNotifier, UserProfile,
    WebhookNotifier,
};

pub type CliEngine = Engine<JsonProfileStore, Box<dyn Notifier>>;

/// Build the engine from the configured store and notifier.
pub fn open_engine() -> Result<CliEngine, Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let notifier: Box<dyn Notifier> = if !config.notifications.enabled {
        Box::new(NullNotifier)
    } else if let Some(url) = config.notifications.webhook_url.as_deref() {
        Box::new(WebhookNotifier::new(url)?)
    } else {
        Box::new(ConsoleNotifier)
    };

    Ok(Engine::new(JsonProfileStore::open()?, notifier))
}

/// Today's calendar date, UTC. Injected into every engine call so the
/// core never reads the clock itself.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Load the stored profile and fold in any date change first, the way
/// every session starts.
pub fn load_reconciled(
    engine: &CliEngine,
) -> Result<Option<UserProfile>, Box<dyn std::error::Error>> {
    match engine.load_profile()? {
        Some(profile) => Ok(Some(engine.reconcile_daily(&profile, today())?)),
        None => Ok(None),
    }
}

/// Load the profile or fail with a pointer to registration.
pub fn require_profile(engine: &CliEngine) -> Result<UserProfile, Box<dyn std::error::Error>> {
    load_reconciled(engine)?
        .ok_or_else(|| "No profile found. Run 'habitquest-cli profile register' first.".into())
}
