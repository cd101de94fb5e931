use crate::error::Result;
use crate::model::StoredMoodEntry;
use crate::repository::MoodEntryStore;
use async_trait::async_trait;
use mood_analytics::MoodEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Entries kept as one pretty-printed JSON array of [`StoredMoodEntry`].
///
/// A missing or blank file reads as an empty history. Writes go through a
/// temporary file and a rename.
#[derive(Debug)]
pub struct JsonFileMoodStore {
	path: PathBuf,
	write_lock: Mutex<()>,
}

impl JsonFileMoodStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			write_lock: Mutex::new(()),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	#[instrument(skip(self), fields(path = %self.path.display()))]
	pub async fn load(&self) -> Result<Vec<StoredMoodEntry>> {
		match fs::read_to_string(&self.path).await {
			Ok(contents) if contents.trim().is_empty() => Ok(Vec::new()),
			Ok(contents) => {
				let records: Vec<StoredMoodEntry> = serde_json::from_str(&contents)?;
				debug!(records = records.len(), "loaded mood entries");
				Ok(records)
			}
			Err(err) if err.kind() == ErrorKind::NotFound => {
				debug!("entries file missing, starting empty");
				Ok(Vec::new())
			}
			Err(err) => Err(err.into()),
		}
	}

	async fn save(&self, records: &[StoredMoodEntry]) -> Result<()> {
		let json = serde_json::to_string_pretty(records)?;
		let staging = self.path.with_extension("tmp");
		fs::write(&staging, json).await?;
		if let Err(err) = fs::rename(&staging, &self.path).await {
			fs::remove_file(&staging).await.ok();
			return Err(err.into());
		}
		Ok(())
	}
}

#[async_trait]
impl MoodEntryStore for JsonFileMoodStore {
	#[instrument(skip(self, entry), fields(path = %self.path.display()))]
	async fn create(&self, user_id: &str, entry: MoodEntry) -> Result<MoodEntry> {
		let _guard = self.write_lock.lock().await;

		let mut records = self.load().await?;
		let position = records.iter().filter(|record| record.belongs_to(user_id)).count();
		entry.validate(position)?;

		records.push(StoredMoodEntry::new(user_id, entry.clone()));
		self.save(&records).await?;

		info!(date = %entry.date, mood = %entry.mood, "logged mood entry");
		Ok(entry)
	}

	async fn list(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
		let records = self.load().await?;
		Ok(records.into_iter().filter(|record| record.belongs_to(user_id)).map(|record| record.entry).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::StoreError;
	use tempfile::tempdir;

	#[tokio::test]
	async fn test_failed_rename_removes_staging_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("entries.json");
		// a directory at the target path makes the rename fail
		std::fs::create_dir(&path).unwrap();

		let store = JsonFileMoodStore::new(&path);
		let err = store.save(&[]).await.unwrap_err();
		assert!(matches!(err, StoreError::Io(_)));
		assert!(!path.with_extension("tmp").exists());
		assert!(path.is_dir());
	}
}
