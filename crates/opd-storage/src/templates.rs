//! Named Template Store
//!
//! Message templates for operator notifications, keyed by name. Saving
//! a template is an explicit `upsert`; the stock templates are seeded
//! on first load and survive alongside user-defined ones.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::store::{KeyValueStore, StorageError, StorageResult};

/// Storage key for the template map
pub const TEMPLATES_KEY: &str = "sms:templates";

/// Stock templates available before any user edits
pub fn stock_templates() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Custom".to_string(), String::new()),
        (
            "Payment Reminder".to_string(),
            "Dear {Name}, your pending payment will be settled today.".to_string(),
        ),
        (
            "Thank You".to_string(),
            "Dear {Name}, thank you for your excellent work in {Location}.".to_string(),
        ),
    ])
}

/// Persistent name-to-body template map
pub struct TemplateStore {
    store: Arc<dyn KeyValueStore>,
}

impl TemplateStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Insert or replace a template body under a name
    pub async fn upsert(&self, name: &str, body: &str) -> StorageResult<()> {
        let mut templates = self.load_all().await;
        templates.insert(name.to_string(), body.to_string());
        self.save_all(&templates).await
    }

    /// Get a template body by name
    pub async fn get(&self, name: &str) -> Option<String> {
        self.load_all().await.get(name).cloned()
    }

    /// Remove a template by name; absent names are a no-op
    pub async fn remove(&self, name: &str) -> StorageResult<()> {
        let mut templates = self.load_all().await;
        if templates.remove(name).is_some() {
            self.save_all(&templates).await?;
        }
        Ok(())
    }

    /// All template names, sorted
    pub async fn names(&self) -> Vec<String> {
        self.load_all().await.keys().cloned().collect()
    }

    async fn load_all(&self) -> BTreeMap<String, String> {
        let raw = match self.store.get(TEMPLATES_KEY).await {
            Ok(raw) => raw,
            Err(StorageError::NotFound(_)) => return stock_templates(),
            Err(e) => {
                debug!(error = %e, "Template store unreadable, using stock templates");
                return stock_templates();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(templates) => templates,
            Err(e) => {
                debug!(error = %e, "Template store corrupt, using stock templates");
                stock_templates()
            }
        }
    }

    async fn save_all(&self, templates: &BTreeMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_string(templates)
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        self.store.put(TEMPLATES_KEY, &json).await
    }
}
