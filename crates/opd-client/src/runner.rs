//! Query Run Orchestration
//!
//! Ties the execution client, the persistence bridge, and the
//! notification sink together around a `QueryState`. A failed run
//! never touches previously stored results or query text; the last
//! successful run stays visible.

use std::sync::Arc;

use tracing::{debug, warn};

use opd_queries::state::QueryState;
use opd_storage::PersistenceBridge;

use crate::client::QueryClient;
use crate::error::ClientResult;
use crate::notify::Notifier;

/// Runs queries and keeps state, storage, and the user in sync
pub struct QueryRunner {
    client: QueryClient,
    bridge: PersistenceBridge,
    notifier: Arc<dyn Notifier>,
}

impl QueryRunner {
    pub fn new(client: QueryClient, bridge: PersistenceBridge, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            bridge,
            notifier,
        }
    }

    /// Run the composed query and apply the result to `state`.
    ///
    /// On success the result replaces the previous one and is cached
    /// for hydration on the next start. On failure a notification is
    /// raised and `state` is left untouched.
    pub async fn execute(&self, state: &mut QueryState) -> ClientResult<()> {
        let spec = state.to_specification();

        match self.client.run(&spec).await {
            Ok(result) => {
                if let Err(e) = self.bridge.save_last_results(&result).await {
                    warn!(error = %e, "Could not cache run results");
                }
                state.apply_result(result);
                Ok(())
            }
            Err(e) => {
                self.notifier.notify(&e.user_message());
                Err(e)
            }
        }
    }

    /// Restore the last successful run's result without a network call
    pub async fn hydrate(&self, state: &mut QueryState) -> bool {
        match self.bridge.load_last_results().await {
            Some(result) => {
                debug!(rows = result.results.len(), "Hydrated last run");
                state.apply_result(result);
                true
            }
            None => false,
        }
    }

    /// Save the current query composition, overwriting any prior save
    pub async fn save_query(&self, state: &QueryState) -> ClientResult<()> {
        self.bridge.save_query_definition(&state.snapshot()).await?;
        Ok(())
    }

    /// Load the saved query composition into `state`, if one exists
    pub async fn load_query(&self, state: &mut QueryState) -> bool {
        match self.bridge.load_query_definition().await {
            Some(def) => {
                state.restore(def);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    use opd_core::config::QueryServiceConfig;
    use opd_queries::spec::Row;
    use opd_storage::{KeyValueStore, MemoryStore, LAST_RESULTS_KEY};

    use crate::notify::{MockNotifier, NullNotifier};

    use super::*;

    async fn spawn_service(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn runner_for(base_url: String, notifier: Arc<dyn Notifier>) -> (QueryRunner, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let client = QueryClient::new(&QueryServiceConfig {
            base_url,
            request_timeout_seconds: 5,
        })
        .unwrap();
        let runner = QueryRunner::new(client, PersistenceBridge::new(store.clone()), notifier);
        (runner, store)
    }

    #[tokio::test]
    async fn test_successful_run_applies_and_caches() {
        let app = Router::new().route(
            "/run-query",
            post(|| async {
                Json(json!({
                    "query": "SELECT userid FROM user_master WHERE 1=1",
                    "results": [{"userid": "OP-1"}]
                }))
            }),
        );
        let (runner, store) = runner_for(spawn_service(app).await, Arc::new(NullNotifier));

        let mut state = QueryState::new();
        runner.execute(&mut state).await.unwrap();

        assert_eq!(state.query_text, "SELECT userid FROM user_master WHERE 1=1");
        assert_eq!(state.rows.len(), 1);
        assert!(store.exists(LAST_RESULTS_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_run_notifies_and_keeps_prior_results() {
        let app = Router::new().route(
            "/run-query",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "invalid field: zzz"})),
                )
            }),
        );

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|message| message == "invalid field: zzz")
            .times(1)
            .return_const(());

        let (runner, store) = runner_for(spawn_service(app).await, Arc::new(notifier));

        let mut state = QueryState::new();
        let mut row = Row::new();
        row.insert("userid".into(), "OP-1".into());
        state.query_text = "SELECT 1".into();
        state.rows = vec![row];

        assert!(runner.execute(&mut state).await.is_err());

        assert_eq!(state.query_text, "SELECT 1");
        assert_eq!(state.rows.len(), 1);
        assert!(!store.exists(LAST_RESULTS_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_hydrate_restores_last_run_without_network() {
        // No server at all; hydration must not need one
        let (runner, store) = runner_for(
            "http://127.0.0.1:9".to_string(),
            Arc::new(NullNotifier),
        );
        store
            .put(
                LAST_RESULTS_KEY,
                r#"{"query":"SELECT 1","results":[{"userid":"OP-1"}]}"#,
            )
            .await
            .unwrap();

        let mut state = QueryState::new();
        assert!(runner.hydrate(&mut state).await);
        assert_eq!(state.query_text, "SELECT 1");
        assert_eq!(state.rows.len(), 1);

        let mut empty = QueryState::new();
        let (bare, _) = runner_for("http://127.0.0.1:9".to_string(), Arc::new(NullNotifier));
        assert!(!bare.hydrate(&mut empty).await);
    }

    #[tokio::test]
    async fn test_last_applied_response_wins() {
        use std::sync::atomic::{AtomicU32, Ordering};

        static CALLS: AtomicU32 = AtomicU32::new(0);
        let app = Router::new().route(
            "/run-query",
            post(|| async {
                let n = CALLS.fetch_add(1, Ordering::SeqCst) + 1;
                Json(json!({"query": format!("SELECT {n}"), "results": []}))
            }),
        );
        let (runner, _) = runner_for(spawn_service(app).await, Arc::new(NullNotifier));

        let mut state = QueryState::new();
        runner.execute(&mut state).await.unwrap();
        runner.execute(&mut state).await.unwrap();

        // shared result state reflects whichever response was applied last
        assert_eq!(state.query_text, "SELECT 2");
    }

    #[tokio::test]
    async fn test_save_and_load_query_round_trip() {
        let (runner, _) = runner_for("http://127.0.0.1:9".to_string(), Arc::new(NullNotifier));

        let mut state = QueryState::new();
        state.set_selected_fields(vec!["userid".into()]);
        state.limit = 25;
        runner.save_query(&state).await.unwrap();

        let mut fresh = QueryState::new();
        assert!(runner.load_query(&mut fresh).await);
        assert_eq!(fresh.snapshot(), state.snapshot());

        let (bare, _) = runner_for("http://127.0.0.1:9".to_string(), Arc::new(NullNotifier));
        let mut untouched = QueryState::new();
        assert!(!bare.load_query(&mut untouched).await);
    }
}
