//! Code-hosting application side: pull request events and REST client

pub mod client;
pub mod events;
pub mod webhooks;

pub use client::{ClientError, HostClient, MergeStatus};
pub use events::{
    HostUser, Project, PullRequest, PullRequestEvent, PullRequestEventKind, PullRequestRef,
    Repository, Rescope,
};
pub use webhooks::HostEventPayload;
