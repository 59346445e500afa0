//! Pull request event processing and notification decisions

pub mod context;
pub mod dispatch;
pub mod eligibility;
pub mod listener;
pub mod notifier;
pub mod rescope;
pub mod services;
pub mod settings;

#[cfg(test)]
mod tests;

pub use context::EventContext;
pub use dispatch::NotificationRequest;
pub use eligibility::{Eligibility, EligibilityFilter, EligibilityFilterChain};
pub use listener::{DropReason, Outcome, PullRequestEventListener};
pub use notifier::JenkinsNotifier;
pub use services::{MergeService, Notifier, SettingsLookup};
pub use settings::InMemorySettingsStore;
