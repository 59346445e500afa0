//! Rescope deduplication
//!
//! The host fires a rescope whenever either side of a pull request moves.
//! Only a new source head should produce a notification; a rescope that
//! leaves the source head untouched came from the destination branch.

/// Which side of the pull request a rescope came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RescopeSide {
    /// The source head changed; the event should be processed.
    Source,
    /// Only the destination moved; the event is a duplicate.
    DestinationOnly,
}

impl RescopeSide {
    pub fn is_eligible(self) -> bool {
        self == RescopeSide::Source
    }
}

/// Classify a rescope from the source head before and after it.
///
/// A missing hash on either side counts as a change.
pub fn classify(previous_from_hash: Option<&str>, current_from_hash: Option<&str>) -> RescopeSide {
    match (previous_from_hash, current_from_hash) {
        (Some(previous), Some(current)) if previous == current => RescopeSide::DestinationOnly,
        _ => RescopeSide::Source,
    }
}
