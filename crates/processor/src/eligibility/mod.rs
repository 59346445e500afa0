//! Eligibility filters
//!
//! Every filter sees the same [`EventContext`] and answers allow or deny.
//! [`EligibilityFilterChain`] composes them: it allows only when every
//! filter allows and stops at the first deny. An empty chain allows.
//! The chain is itself a filter, so chains nest.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::context::EventContext;

mod branches;
mod committers;

pub use branches::BranchFilter;
pub use committers::IgnoreCommittersFilter;

/// Verdict of a single filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Allow,
    Deny,
}

impl Eligibility {
    pub fn is_allowed(self) -> bool {
        self == Eligibility::Allow
    }
}

impl From<bool> for Eligibility {
    fn from(allowed: bool) -> Self {
        if allowed {
            Eligibility::Allow
        } else {
            Eligibility::Deny
        }
    }
}

/// A pluggable notification policy.
///
/// Errors are collaborator failures (e.g. a settings read) and propagate to
/// the caller; a veto is `Ok(Eligibility::Deny)`.
#[async_trait]
pub trait EligibilityFilter: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    async fn evaluate(&self, context: &EventContext<'_>) -> common::Result<Eligibility>;
}

/// Ordered AND of filters
#[derive(Clone, Default)]
pub struct EligibilityFilterChain {
    filters: Vec<Arc<dyn EligibilityFilter>>,
}

impl EligibilityFilterChain {
    pub fn new(filters: Vec<Arc<dyn EligibilityFilter>>) -> Self {
        Self { filters }
    }

    /// Append a filter, builder style
    pub fn with(mut self, filter: Arc<dyn EligibilityFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn push(&mut self, filter: Arc<dyn EligibilityFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[async_trait]
impl EligibilityFilter for EligibilityFilterChain {
    fn name(&self) -> &str {
        "chain"
    }

    async fn evaluate(&self, context: &EventContext<'_>) -> common::Result<Eligibility> {
        for filter in &self.filters {
            if filter.evaluate(context).await? == Eligibility::Deny {
                debug!(
                    "Filter {} denied notification for PR #{} in {}",
                    filter.name(),
                    context.event().pull_request.id,
                    context.repository()
                );
                return Ok(Eligibility::Deny);
            }
        }
        Ok(Eligibility::Allow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fakes::{CountingFilter, FailingFilter};
    use crate::tests::fixtures;

    fn chain_of(verdicts: &[Eligibility]) -> (EligibilityFilterChain, Vec<Arc<CountingFilter>>) {
        let filters: Vec<Arc<CountingFilter>> = verdicts
            .iter()
            .map(|v| Arc::new(CountingFilter::new(*v)))
            .collect();
        let chain = EligibilityFilterChain::new(
            filters
                .iter()
                .map(|f| f.clone() as Arc<dyn EligibilityFilter>)
                .collect(),
        );
        (chain, filters)
    }

    #[tokio::test]
    async fn test_empty_chain_allows() {
        let event = fixtures::opened("refs/heads/main", Some("abc123"));
        let chain = EligibilityFilterChain::default();
        assert!(chain.is_empty());
        assert_eq!(
            chain.evaluate(&EventContext::from_event(&event)).await.unwrap(),
            Eligibility::Allow
        );
    }

    #[tokio::test]
    async fn test_all_allow() {
        let event = fixtures::opened("refs/heads/main", Some("abc123"));
        let (chain, filters) = chain_of(&[Eligibility::Allow, Eligibility::Allow, Eligibility::Allow]);
        assert_eq!(
            chain.evaluate(&EventContext::from_event(&event)).await.unwrap(),
            Eligibility::Allow
        );
        assert!(filters.iter().all(|f| f.calls() == 1));
    }

    #[tokio::test]
    async fn test_any_deny_denies_regardless_of_position() {
        let event = fixtures::opened("refs/heads/main", Some("abc123"));
        let context = EventContext::from_event(&event);
        for deny_at in 0..3 {
            let mut verdicts = [Eligibility::Allow; 3];
            verdicts[deny_at] = Eligibility::Deny;
            let (chain, _) = chain_of(&verdicts);
            assert_eq!(chain.evaluate(&context).await.unwrap(), Eligibility::Deny, "deny at {deny_at}");
        }
    }

    #[tokio::test]
    async fn test_stops_at_first_deny() {
        let event = fixtures::opened("refs/heads/main", Some("abc123"));
        let (chain, filters) = chain_of(&[Eligibility::Allow, Eligibility::Deny, Eligibility::Allow]);
        chain.evaluate(&EventContext::from_event(&event)).await.unwrap();

        assert_eq!(filters[0].calls(), 1);
        assert_eq!(filters[1].calls(), 1);
        assert_eq!(filters[2].calls(), 0);
    }

    #[tokio::test]
    async fn test_nested_chain() {
        let event = fixtures::opened("refs/heads/main", Some("abc123"));
        let (inner, _) = chain_of(&[Eligibility::Allow, Eligibility::Deny]);
        let outer = EligibilityFilterChain::default()
            .with(Arc::new(CountingFilter::new(Eligibility::Allow)))
            .with(Arc::new(inner));
        assert_eq!(outer.len(), 2);
        assert_eq!(
            outer.evaluate(&EventContext::from_event(&event)).await.unwrap(),
            Eligibility::Deny
        );
    }

    #[tokio::test]
    async fn test_filter_error_propagates() {
        let event = fixtures::opened("refs/heads/main", Some("abc123"));
        let mut chain = EligibilityFilterChain::default();
        chain.push(Arc::new(FailingFilter));
        let result = chain.evaluate(&EventContext::from_event(&event)).await;
        assert!(matches!(result, Err(common::Error::Settings(_))));
    }
}
