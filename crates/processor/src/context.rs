//! Canonical view of an event passed to eligibility filters

use host::{PullRequestEvent, Repository};

/// Immutable per-event context, borrowed from the event it describes
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    event: &'a PullRequestEvent,
    repository: &'a Repository,
    username: &'a str,
}

impl<'a> EventContext<'a> {
    /// Build the context for an event. The repository is the pull request's
    /// destination, never the fork it comes from.
    pub fn from_event(event: &'a PullRequestEvent) -> Self {
        Self {
            event,
            repository: event.destination_repository(),
            username: &event.actor.name,
        }
    }

    pub fn event(&self) -> &'a PullRequestEvent {
        self.event
    }

    pub fn repository(&self) -> &'a Repository {
        self.repository
    }

    pub fn username(&self) -> &'a str {
        self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn test_context_uses_destination_repository() {
        let event = fixtures::opened("refs/heads/feature/foo", Some("abc123"));
        let context = EventContext::from_event(&event);

        assert_eq!(context.repository().slug, fixtures::DESTINATION_SLUG);
        assert_ne!(context.repository(), &event.pull_request.from_ref.repository);
        assert_eq!(context.username(), fixtures::ACTOR);
        assert!(std::ptr::eq(context.event(), &event));
    }
}
