use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::{ObjectStore, StorageError};

/// In-memory stand-in for the S3 backend. Objects are keyed metadata maps;
/// presigned URLs are fake but structured, embedding the method, key, and
/// expiry so tests can assert what a URL was bound to.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object under `key`, as if a client had uploaded against a
    /// presigned PUT URL.
    pub fn put_object(&self, key: &str, metadata: HashMap<String, String>) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), metadata);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn metadata(&self, key: &str) -> Option<HashMap<String, String>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    fn fake_url(&self, method: &str, key: &str, expires_in: Duration) -> String {
        let expires_at = Utc::now() + expires_in;
        format!(
            "https://assets.test/{}?method={}&expires={}&ttl={}",
            key,
            method,
            expires_at.timestamp(),
            expires_in.as_secs()
        )
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn head_metadata(&self, key: &str) -> Result<HashMap<String, String>, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn replace_metadata(
        &self,
        key: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), StorageError> {
        let mut objects = self.objects.lock().unwrap();
        match objects.get_mut(key) {
            Some(existing) => {
                *existing = metadata;
                Ok(())
            }
            None => Err(StorageError::NotFound),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        Ok(self.fake_url("PUT", key, expires_in))
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        Ok(self.fake_url("GET", key, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replace_metadata_requires_an_existing_object() {
        let store = InMemoryObjectStore::new();
        let result = store.replace_metadata("ghost", HashMap::new()).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn replace_metadata_swaps_the_whole_mapping() {
        let store = InMemoryObjectStore::new();
        let mut original = HashMap::new();
        original.insert("content-kind".to_string(), "image".to_string());
        store.put_object("a", original);

        let mut replacement = HashMap::new();
        replacement.insert("asset-status".to_string(), "uploaded".to_string());
        store.replace_metadata("a", replacement.clone()).await.unwrap();

        assert_eq!(store.metadata("a"), Some(replacement));
    }

    #[tokio::test]
    async fn delete_of_an_absent_key_succeeds() {
        let store = InMemoryObjectStore::new();
        store.delete("ghost").await.unwrap();
        assert!(!store.contains("ghost"));
    }

    #[tokio::test]
    async fn presigned_urls_encode_method_key_and_ttl() {
        let store = InMemoryObjectStore::new();
        let url = store
            .presign_put("some-key", Duration::from_secs(900))
            .await
            .unwrap();
        assert!(url.contains("/some-key?"));
        assert!(url.contains("method=PUT"));
        assert!(url.contains("ttl=900"));
    }
}
