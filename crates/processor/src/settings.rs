//! In-memory repository settings store

use async_trait::async_trait;
use common::models::RepositorySettings;
use host::Repository;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

use crate::services::SettingsLookup;

/// One entry of a settings file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsEntry {
    repository_id: i64,
    settings: RepositorySettings,
}

/// Settings keyed by repository id
#[derive(Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<HashMap<i64, RepositorySettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of `{ "repositoryId": .., "settings": {..} }`
    pub fn from_json(json: &str) -> common::Result<Self> {
        let entries: Vec<SettingsEntry> =
            serde_json::from_str(json).map_err(|e| common::Error::Settings(e.to_string()))?;
        let settings = entries
            .into_iter()
            .map(|e| (e.repository_id, e.settings))
            .collect();
        Ok(Self {
            settings: RwLock::new(settings),
        })
    }

    /// Load a settings file from disk
    pub async fn load(path: &Path) -> common::Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| common::Error::Settings(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&json)?;
        info!(
            "Loaded webhook settings for {} repositories from {}",
            store.settings.read().await.len(),
            path.display()
        );
        Ok(store)
    }

    pub async fn insert(&self, repository_id: i64, settings: RepositorySettings) {
        self.settings.write().await.insert(repository_id, settings);
    }

    pub async fn remove(&self, repository_id: i64) -> Option<RepositorySettings> {
        self.settings.write().await.remove(&repository_id)
    }
}

#[async_trait]
impl SettingsLookup for InMemorySettingsStore {
    async fn get_settings(&self, repository: &Repository) -> common::Result<Option<RepositorySettings>> {
        Ok(self.settings.read().await.get(&repository.id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[tokio::test]
    async fn test_insert_and_remove() {
        let store = InMemorySettingsStore::new();
        let repository = fixtures::destination_repository();
        assert_eq!(store.get_settings(&repository).await.unwrap(), None);

        store.insert(repository.id, fixtures::settings()).await;
        assert_eq!(
            store.get_settings(&repository).await.unwrap(),
            Some(fixtures::settings())
        );

        assert!(store.remove(repository.id).await.is_some());
        assert_eq!(store.get_settings(&repository).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_from_json() {
        let store = InMemorySettingsStore::from_json(
            r#"[{
                "repositoryId": 1,
                "settings": {"jenkinsBase": "http://ci", "cloneUrl": "ssh://git/app.git", "omitHashCode": true}
            }]"#,
        )
        .unwrap();
        let settings = store
            .get_settings(&fixtures::destination_repository())
            .await
            .unwrap()
            .unwrap();
        assert!(settings.omit_hash_code);
        assert_eq!(settings.clone_url, "ssh://git/app.git");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            InMemorySettingsStore::from_json("{}"),
            Err(common::Error::Settings(_))
        ));
    }
}
