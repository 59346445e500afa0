//! Per-repository webhook settings

use serde::{Deserialize, Serialize};

/// Webhook configuration for a single repository.
///
/// Presence of a record means notifications are enabled for the repository.
/// The remaining fields are read by eligibility filters and the notifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySettings {
    /// Base URL of the CI server receiving `notifyCommit` calls
    pub jenkins_base: String,
    /// Clone URL the CI server knows the repository by
    pub clone_url: String,
    #[serde(default)]
    pub omit_hash_code: bool,
    #[serde(default)]
    pub omit_branch_name: bool,
    /// Usernames whose activity never triggers a notification
    #[serde(default)]
    pub ignore_committers: Vec<String>,
    #[serde(default)]
    pub branch_options: BranchOptions,
}

impl RepositorySettings {
    pub fn new(jenkins_base: impl Into<String>, clone_url: impl Into<String>) -> Self {
        Self {
            jenkins_base: jenkins_base.into(),
            clone_url: clone_url.into(),
            omit_hash_code: false,
            omit_branch_name: false,
            ignore_committers: Vec::new(),
            branch_options: BranchOptions::All,
        }
    }

    pub fn is_ignored_committer(&self, username: &str) -> bool {
        self.ignore_committers
            .iter()
            .any(|c| c.eq_ignore_ascii_case(username))
    }
}

/// Which source branches may trigger a notification
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", content = "branches", rename_all = "lowercase")]
pub enum BranchOptions {
    #[default]
    All,
    Whitelist(Vec<String>),
    Blacklist(Vec<String>),
}

impl BranchOptions {
    /// Whether a branch passes these options
    pub fn permits(&self, branch: &str) -> bool {
        match self {
            BranchOptions::All => true,
            BranchOptions::Whitelist(patterns) => patterns.iter().any(|p| branch_matches(p, branch)),
            BranchOptions::Blacklist(patterns) => !patterns.iter().any(|p| branch_matches(p, branch)),
        }
    }
}

/// A pattern matches exactly, or by prefix when it ends in `*`.
pub fn branch_matches(pattern: &str, branch: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => branch.starts_with(prefix),
        None => pattern == branch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_matches_exact() {
        assert!(branch_matches("main", "main"));
        assert!(!branch_matches("main", "main2"));
    }

    #[test]
    fn test_branch_matches_prefix() {
        assert!(branch_matches("release/*", "release/1.0"));
        assert!(branch_matches("*", "anything"));
        assert!(!branch_matches("release/*", "feature/release"));
    }

    #[test]
    fn test_branch_options_permits() {
        let whitelist = BranchOptions::Whitelist(vec!["main".to_string(), "release/*".to_string()]);
        assert!(whitelist.permits("main"));
        assert!(whitelist.permits("release/2.x"));
        assert!(!whitelist.permits("feature/foo"));

        let blacklist = BranchOptions::Blacklist(vec!["wip/*".to_string()]);
        assert!(blacklist.permits("feature/foo"));
        assert!(!blacklist.permits("wip/spike"));

        assert!(BranchOptions::All.permits("whatever"));
    }

    #[test]
    fn test_ignore_committers_case_insensitive() {
        let mut settings = RepositorySettings::new("http://ci", "ssh://git/repo.git");
        settings.ignore_committers = vec!["ci-bot".to_string()];
        assert!(settings.is_ignored_committer("CI-Bot"));
        assert!(!settings.is_ignored_committer("alice"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let settings: RepositorySettings = serde_json::from_str(
            r#"{"jenkinsBase": "http://ci", "cloneUrl": "ssh://git/repo.git"}"#,
        )
        .unwrap();
        assert_eq!(settings, RepositorySettings::new("http://ci", "ssh://git/repo.git"));
    }

    #[test]
    fn test_deserialize_branch_options() {
        let settings: RepositorySettings = serde_json::from_str(
            r#"{
                "jenkinsBase": "http://ci",
                "cloneUrl": "ssh://git/repo.git",
                "branchOptions": {"mode": "blacklist", "branches": ["wip/*"]}
            }"#,
        )
        .unwrap();
        assert_eq!(
            settings.branch_options,
            BranchOptions::Blacklist(vec!["wip/*".to_string()])
        );
    }
}
