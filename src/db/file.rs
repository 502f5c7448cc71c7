use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{MoodLogStore, StoreError};
use crate::models::mood::MoodEntry;

/// JSON-lines file shared by all users, one entry per line.
///
/// Records missing `entry_text` or `tags` read back with empty values; lines
/// that do not parse at all are skipped so one bad record cannot hide the
/// rest of the log.
#[derive(Debug)]
pub struct FileMoodLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileMoodLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<MoodEntry>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let entries = raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(idx, line)| match serde_json::from_str::<MoodEntry>(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        error = %e,
                        "Skipping malformed mood log record"
                    );
                    None
                }
            })
            .collect();
        Ok(entries)
    }
}

#[async_trait]
impl MoodLogStore for FileMoodLogStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn append(&self, entry: &MoodEntry) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn list_ordered(&self, user_id: &str) -> Result<Vec<MoodEntry>, StoreError> {
        let mut entries: Vec<MoodEntry> = self
            .read_all()
            .await?
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect();
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let parent = self
                    .path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                fs::metadata(parent).await?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::Mood;
    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_reads_as_empty_log() {
        let dir = tempdir().unwrap();
        let store = FileMoodLogStore::new(dir.path().join("moods.jsonl"));

        assert!(store.list_ordered("u1").await.unwrap().is_empty());
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn appended_entries_survive_a_new_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("moods.jsonl");
        let now = Utc::now();
        let first = MoodEntry::new("u1", now - Duration::minutes(5), Mood::Uneasy, "meh", vec!["Work".into()]);
        let second = MoodEntry::new("u1", now, Mood::Content, "better", vec![]);
        let other = MoodEntry::new("u2", now, Mood::Down, "", vec![]);

        let store = FileMoodLogStore::new(&path);
        store.append(&second).await.unwrap();
        store.append(&other).await.unwrap();
        store.append(&first).await.unwrap();

        let reopened = FileMoodLogStore::new(&path);
        let log = reopened.list_ordered("u1").await.unwrap();
        assert_eq!(log, vec![first, second]);
    }

    #[tokio::test]
    async fn recovers_records_with_missing_fields_and_skips_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("moods.jsonl");
        let contents = concat!(
            r#"{"id":"6f1c1a0e-8d2b-4a4e-9a39-0b8f0f3a9d11","user_id":"u1","timestamp":"2024-03-01T08:00:00Z","mood":"neutral"}"#,
            "\n",
            "not json at all\n",
            "\n",
            r#"{"id":"0b0e5f2c-1f43-4a57-8d0e-6a7c1e0d2b33","user_id":"u1","timestamp":"2024-03-02T08:00:00Z","mood":"joyful","entry_text":"great","tags":["focus"]}"#,
            "\n",
        );
        tokio::fs::write(&path, contents).await.unwrap();

        let log = FileMoodLogStore::new(&path).list_ordered("u1").await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].entry_text, "");
        assert!(log[0].tags.is_empty());
        assert_eq!(log[1].tags, vec!["focus"]);
    }

    #[tokio::test]
    async fn append_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = FileMoodLogStore::new(dir.path().join("nope").join("moods.jsonl"));
        let entry = MoodEntry::new("u1", Utc::now(), Mood::Neutral, "", vec![]);

        assert!(store.append(&entry).await.is_err());
        assert!(store.ping().await.is_err());
    }
}
