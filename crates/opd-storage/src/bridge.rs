//! Persistence Bridge
//!
//! Typed access to the two fixed storage keys: the last successful
//! run's results and the explicitly saved query definition. Reads fail
//! open: an absent key, unreadable store, or corrupt payload all load
//! as `None`.

use std::sync::Arc;

use tracing::debug;

use opd_queries::spec::QueryResult;
use opd_queries::state::SavedQueryDefinition;

use crate::store::{KeyValueStore, StorageError, StorageResult};

/// Storage key for the last successful run's `{query, results}`
pub const LAST_RESULTS_KEY: &str = "qb:lastResults";
/// Storage key for the saved query definition
pub const SAVED_QUERY_KEY: &str = "qb:saved";

/// Bridge between query state and the key-value store
#[derive(Clone)]
pub struct PersistenceBridge {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceBridge {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the last run's result, overwriting any prior value
    pub async fn save_last_results(&self, result: &QueryResult) -> StorageResult<()> {
        let json = serde_json::to_string(result)
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        self.store.put(LAST_RESULTS_KEY, &json).await
    }

    /// Load the cached last run, if any
    pub async fn load_last_results(&self) -> Option<QueryResult> {
        self.load(LAST_RESULTS_KEY).await
    }

    /// Persist the saved query definition, overwriting any prior value
    pub async fn save_query_definition(&self, def: &SavedQueryDefinition) -> StorageResult<()> {
        let json = serde_json::to_string(def)
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        self.store.put(SAVED_QUERY_KEY, &json).await
    }

    /// Load the saved query definition, if any
    pub async fn load_query_definition(&self) -> Option<SavedQueryDefinition> {
        self.load(SAVED_QUERY_KEY).await
    }

    async fn load<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(raw) => raw,
            Err(StorageError::NotFound(_)) => return None,
            Err(e) => {
                debug!(key, error = %e, "Stored value unreadable, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "Stored value corrupt, treating as absent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use opd_queries::spec::Row;
    use opd_queries::state::QueryState;

    fn bridge() -> PersistenceBridge {
        PersistenceBridge::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_last_results_round_trip() {
        let bridge = bridge();
        assert!(bridge.load_last_results().await.is_none());

        let mut row = Row::new();
        row.insert("userid".into(), "OP-1".into());
        let result = QueryResult {
            query: "SELECT userid FROM user_master WHERE 1=1".into(),
            results: vec![row],
        };

        bridge.save_last_results(&result).await.unwrap();
        let loaded = bridge.load_last_results().await.unwrap();
        assert_eq!(loaded, result);
    }

    #[tokio::test]
    async fn test_query_definition_round_trip() {
        let bridge = bridge();
        assert!(bridge.load_query_definition().await.is_none());

        let def = QueryState::new().snapshot();
        bridge.save_query_definition(&def).await.unwrap();

        let loaded = bridge.load_query_definition().await.unwrap();
        assert_eq!(loaded, def);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let bridge = bridge();

        let first = QueryResult {
            query: "SELECT 1".into(),
            results: vec![],
        };
        let second = QueryResult {
            query: "SELECT 2".into(),
            results: vec![],
        };

        bridge.save_last_results(&first).await.unwrap();
        bridge.save_last_results(&second).await.unwrap();

        assert_eq!(bridge.load_last_results().await.unwrap().query, "SELECT 2");
    }

    #[tokio::test]
    async fn test_corrupt_payload_loads_as_absent() {
        let store = Arc::new(MemoryStore::new());
        store.put(LAST_RESULTS_KEY, "{not json").await.unwrap();
        store.put(SAVED_QUERY_KEY, "[1, 2").await.unwrap();

        let bridge = PersistenceBridge::new(store);
        assert!(bridge.load_last_results().await.is_none());
        assert!(bridge.load_query_definition().await.is_none());
    }
}
