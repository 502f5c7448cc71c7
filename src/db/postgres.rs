use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{pool, MoodLogStore, StoreError};
use crate::models::mood::{Mood, MoodEntry};

#[derive(Debug, FromRow)]
struct MoodEntryRow {
    id: Uuid,
    user_id: String,
    recorded_at: DateTime<Utc>,
    score: i16,
    entry_text: Option<String>,
    tags: Option<Vec<String>>,
}

impl MoodEntryRow {
    /// Nullable columns fall back to empty values. A score outside the mood
    /// scale means the row cannot be interpreted, so it yields `None`.
    fn into_entry(self) -> Option<MoodEntry> {
        let mood = Mood::from_score(i32::from(self.score))?;
        Some(MoodEntry {
            id: self.id,
            user_id: self.user_id,
            timestamp: self.recorded_at,
            mood,
            entry_text: self.entry_text.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PgMoodLogStore {
    db: PgPool,
}

impl PgMoodLogStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Connects and brings the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let db = pool::create_pool(database_url).await?;
        sqlx::migrate!("./migrations").run(&db).await?;
        tracing::info!("Database migrations applied");
        Ok(Self::new(db))
    }
}

#[async_trait]
impl MoodLogStore for PgMoodLogStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn append(&self, entry: &MoodEntry) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO mood_entries (id, user_id, recorded_at, mood, score, entry_text, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(entry.timestamp)
        .bind(entry.mood.label())
        .bind(entry.score() as i16)
        .bind(&entry.entry_text)
        .bind(&entry.tags)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn list_ordered(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError> {
        let rows = sqlx::query_as::<_, MoodEntryRow>(
            r#"
            SELECT id, user_id, recorded_at, score, entry_text, tags
            FROM mood_entries
            WHERE user_id = $1
            ORDER BY recorded_at ASC, created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let entries = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                let entry = row.into_entry();
                if entry.is_none() {
                    tracing::warn!(entry_id = %id, "Skipping mood entry with out-of-range score");
                }
                entry
            })
            .collect();
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(score: i16) -> MoodEntryRow {
        MoodEntryRow {
            id: Uuid::new_v4(),
            user_id: "u1".into(),
            recorded_at: Utc::now(),
            score,
            entry_text: None,
            tags: None,
        }
    }

    #[test]
    fn null_columns_read_back_as_empty() {
        let entry = row(4).into_entry().unwrap();
        assert_eq!(entry.mood, Mood::Content);
        assert_eq!(entry.entry_text, "");
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        assert!(row(0).into_entry().is_none());
        assert!(row(9).into_entry().is_none());
    }
}
