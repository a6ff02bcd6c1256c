//! # Habitquest Core Library
//!
//! This library provides the core progression logic for Habitquest, a
//! gamified daily-habit tracker for children. Users register for a
//! one-day trial, complete daily missions to earn points, build a streak
//! of consecutive active days, and unlock further content days by
//! applying a purchased plan.
//!
//! ## Architecture
//!
//! - **Catalogs**: immutable mission and plan definitions, fixed at
//!   process start
//! - **Progression**: pure profile transitions with caller-injected time
//!   (registration, daily reset, mission toggling, plan application)
//! - **Engine**: binds the transitions to a persistence store and a
//!   best-effort notification gateway
//! - **Storage**: a single JSON profile record plus TOML configuration
//!   under the application data directory
//!
//! ## Key Components
//!
//! - [`Engine`]: orchestrates transitions, persistence, and notification
//! - [`UserProfile`]: the per-user progression record
//! - [`ProfileStore`]: persistence contract (load/save, overwrite-only)
//! - [`Notifier`]: fire-and-forget lifecycle event transport

pub mod catalog;
pub mod engine;
pub mod error;
pub mod events;
pub mod notify;
pub mod profile;
pub mod progression;
pub mod storage;
pub mod summary;

pub use catalog::{
    builtin_missions, builtin_plans, find_mission, find_plan, mission_ids, plan_ids, Mission,
    PlanConfig, PlanId,
};
pub use engine::Engine;
pub use error::{ConfigError, CoreError, NotifyError, RegistrationError, StorageError};
pub use events::LifecycleEvent;
pub use notify::{ConsoleNotifier, Notifier, NullNotifier, WebhookNotifier};
pub use profile::UserProfile;
pub use storage::{data_dir, Config, JsonProfileStore, ProfileStore};
pub use summary::{daily_summary, DailySummary};
