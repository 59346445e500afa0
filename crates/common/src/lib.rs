//! Common types and utilities for the pull request webhook trigger

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
