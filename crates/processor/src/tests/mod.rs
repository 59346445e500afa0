//! Shared fixtures and collaborator fakes for unit tests

pub mod fixtures;
