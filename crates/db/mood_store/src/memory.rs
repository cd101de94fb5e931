use crate::error::Result;
use crate::model::StoredMoodEntry;
use crate::repository::MoodEntryStore;
use async_trait::async_trait;
use mood_analytics::MoodEntry;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryMoodStore {
	records: RwLock<Vec<StoredMoodEntry>>,
}

impl InMemoryMoodStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_records(records: Vec<StoredMoodEntry>) -> Self {
		Self { records: RwLock::new(records) }
	}

	pub async fn len(&self) -> usize {
		self.records.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.records.read().await.is_empty()
	}
}

#[async_trait]
impl MoodEntryStore for InMemoryMoodStore {
	async fn create(&self, user_id: &str, entry: MoodEntry) -> Result<MoodEntry> {
		let mut records = self.records.write().await;
		let position = records.iter().filter(|record| record.belongs_to(user_id)).count();
		entry.validate(position)?;
		records.push(StoredMoodEntry::new(user_id, entry.clone()));
		Ok(entry)
	}

	async fn list(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
		let records = self.records.read().await;
		Ok(records.iter().filter(|record| record.belongs_to(user_id)).map(|record| record.entry.clone()).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::StoreError;
	use chrono::NaiveDate;
	use mood_analytics::ValidationError;

	fn entry(d: u32, mood: &str, intensity: u8) -> MoodEntry {
		MoodEntry::new(NaiveDate::from_ymd_opt(2024, 11, d).unwrap(), mood, intensity)
	}

	#[tokio::test]
	async fn test_create_and_list_per_user() {
		let store = InMemoryMoodStore::new();
		store.create("alex", entry(1, "Happy", 8)).await.unwrap();
		store.create("sam", entry(1, "Sad", 3)).await.unwrap();
		store.create("alex", entry(2, "Calm", 6)).await.unwrap();

		let alex: Vec<_> = store.list("alex").await.unwrap().into_iter().map(|e| e.mood).collect();
		assert_eq!(alex, vec!["Happy", "Calm"]);
		assert_eq!(store.list("sam").await.unwrap().len(), 1);
		assert!(store.list("nobody").await.unwrap().is_empty());
		assert_eq!(store.len().await, 3);
	}

	#[tokio::test]
	async fn test_create_rejects_invalid_intensity() {
		let store = InMemoryMoodStore::new();
		store.create("alex", entry(1, "Happy", 8)).await.unwrap();

		let err = store.create("alex", entry(2, "Happy", 11)).await.unwrap_err();
		assert!(matches!(
			err,
			StoreError::InvalidEntry(ValidationError::IntensityOutOfRange { index: 1, intensity: 11 })
		));
		assert_eq!(store.len().await, 1);
	}

	#[tokio::test]
	async fn test_query_range() {
		let store = InMemoryMoodStore::with_records(vec![
			StoredMoodEntry::new("alex", entry(3, "A", 5)),
			StoredMoodEntry::new("alex", entry(10, "B", 5)),
			StoredMoodEntry::new("alex", entry(20, "C", 5)),
			StoredMoodEntry::new("sam", entry(10, "D", 5)),
		]);
		let start = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
		let end = NaiveDate::from_ymd_opt(2024, 11, 10).unwrap();

		let moods: Vec<_> = store.query("alex", start, end).await.unwrap().into_iter().map(|e| e.mood).collect();
		assert_eq!(moods, vec!["A", "B"]);
		assert!(matches!(store.query("alex", end, start).await, Err(StoreError::InvalidRange { .. })));
	}
}
