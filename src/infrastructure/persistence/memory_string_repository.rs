//! Process-local implementation of the string repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{AnalyzedString, NewAnalyzedString};
use crate::domain::filter::StringFilter;
use crate::domain::repositories::StringRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Default)]
struct Store {
    next_seq: u64,
    records: BTreeMap<u64, AnalyzedString>,
    seq_by_id: HashMap<String, u64>,
    seq_by_value: HashMap<String, u64>,
}

/// A repository that keeps records in memory.
///
/// Selected with `STORAGE_BACKEND=memory` and used by the handler tests.
/// Data is lost on restart. Both uniqueness checks and the insert run under a
/// single write lock, so concurrent inserts of the same value cannot both win.
#[derive(Default)]
pub struct InMemoryStringRepository {
    store: RwLock<Store>,
}

impl InMemoryStringRepository {
    pub fn new() -> Self {
        debug!("Using in-memory string storage");
        Self::default()
    }
}

#[async_trait]
impl StringRepository for InMemoryStringRepository {
    async fn insert(&self, new_string: NewAnalyzedString) -> Result<AnalyzedString, AppError> {
        let mut store = self.store.write().await;

        if store.seq_by_id.contains_key(new_string.id())
            || store.seq_by_value.contains_key(&new_string.value)
        {
            return Err(AppError::conflict(
                "String already exists",
                json!({ "id": new_string.id() }),
            ));
        }

        let record = new_string.into_stored(Utc::now());
        let seq = store.next_seq;
        store.next_seq += 1;

        store.seq_by_id.insert(record.id.clone(), seq);
        store.seq_by_value.insert(record.value.clone(), seq);
        store.records.insert(seq, record.clone());

        Ok(record)
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .seq_by_value
            .get(value)
            .and_then(|seq| store.records.get(seq))
            .cloned())
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool, AppError> {
        let mut store = self.store.write().await;

        let Some(seq) = store.seq_by_value.remove(value) else {
            return Ok(false);
        };
        if let Some(record) = store.records.remove(&seq) {
            store.seq_by_id.remove(&record.id);
        }

        Ok(true)
    }

    async fn list(&self, filter: StringFilter) -> Result<Vec<AnalyzedString>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.read().await.records.len() as i64)
    }
}
