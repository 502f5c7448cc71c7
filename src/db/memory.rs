use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{MoodLogStore, StoreError};
use crate::models::mood::MoodEntry;

/// Process-local store. Appends are serialized by the mutex, so concurrent
/// submissions from one user cannot interleave.
#[derive(Debug, Default)]
pub struct InMemoryMoodLogStore {
    logs: Mutex<HashMap<String, Vec<MoodEntry>>>,
}

impl InMemoryMoodLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodLogStore for InMemoryMoodLogStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn append(&self, entry: &MoodEntry) -> Result<(), StoreError> {
        let mut logs = self.logs.lock().await;
        logs.entry(entry.user_id.clone())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_ordered(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError> {
        let logs = self.logs.lock().await;
        let mut entries = logs.get(user_id).cloned().unwrap_or_default();
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::Mood;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn lists_entries_ascending_even_if_appended_out_of_order() {
        let store = InMemoryMoodLogStore::new();
        let now = Utc::now();
        let late = MoodEntry::new("u1", now, Mood::Joyful, "", vec![]);
        let early = MoodEntry::new("u1", now - Duration::hours(3), Mood::Down, "", vec![]);

        store.append(&late).await.unwrap();
        store.append(&early).await.unwrap();

        let ids: Vec<_> = store
            .list_ordered("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![early.id, late.id]);
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = InMemoryMoodLogStore::new();
        store
            .append(&MoodEntry::new("u1", Utc::now(), Mood::Neutral, "", vec![]))
            .await
            .unwrap();

        assert_eq!(store.list_ordered("u1").await.unwrap().len(), 1);
        assert!(store.list_ordered("u2").await.unwrap().is_empty());
    }
}
