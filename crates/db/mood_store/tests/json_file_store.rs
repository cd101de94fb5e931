use chrono::NaiveDate;
use mood_analytics::{compute_stats, MoodEntry, TrendDirection};
use mood_store::{JsonFileMoodStore, MoodEntryStore, StoreError};
use tempfile::tempdir;

fn entry(d: u32, mood: &str, intensity: u8) -> MoodEntry {
	MoodEntry::new(NaiveDate::from_ymd_opt(2025, 1, d).unwrap(), mood, intensity)
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
	let dir = tempdir().unwrap();
	let store = JsonFileMoodStore::new(dir.path().join("entries.json"));
	assert!(store.list("alex").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_persists_across_instances() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("entries.json");

	let store = JsonFileMoodStore::new(&path);
	store.create("alex", entry(1, "Anxious", 4).with_notes("deadline")).await.unwrap();
	store.create("alex", entry(2, "Calm", 7).with_activity("walk")).await.unwrap();
	store.create("sam", entry(2, "Happy", 9)).await.unwrap();

	let reopened = JsonFileMoodStore::new(&path);
	let entries = reopened.list("alex").await.unwrap();
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].notes.as_deref(), Some("deadline"));
	assert_eq!(entries[1].activities, vec!["walk"]);

	let stats = compute_stats(&entries).unwrap();
	assert_eq!(stats.trend_direction, TrendDirection::Up);
	assert_eq!(stats.streak_days, 2);
}

#[tokio::test]
async fn test_file_format_is_flat_camel_case() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("entries.json");
	let store = JsonFileMoodStore::new(&path);
	store.create("alex", entry(5, "Happy", 8)).await.unwrap();

	let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
	assert_eq!(raw[0]["userId"], "alex");
	assert_eq!(raw[0]["date"], "2025-01-05");
	assert_eq!(raw[0]["intensity"], 8);
}

#[tokio::test]
async fn test_reads_hand_written_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("entries.json");
	std::fs::write(
		&path,
		r#"[
			{"userId": "alex", "date": "2025-01-03", "mood": "Sad", "intensity": 3},
			{"userId": "alex", "date": "2025-01-01", "time": "08:30", "mood": "Calm", "intensity": 6}
		]"#,
	)
	.unwrap();

	let store = JsonFileMoodStore::new(&path);
	let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
	let end = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
	let entries = store.query("alex", start, end).await.unwrap();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].time.as_deref(), Some("08:30"));
}

#[tokio::test]
async fn test_invalid_entry_not_written() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("entries.json");
	let store = JsonFileMoodStore::new(&path);

	let err = store.create("alex", entry(1, "Happy", 0)).await.unwrap_err();
	assert!(matches!(err, StoreError::InvalidEntry(_)));
	assert!(!path.exists());
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("entries.json");
	std::fs::write(&path, "{ not json").unwrap();

	let store = JsonFileMoodStore::new(&path);
	assert!(matches!(store.list("alex").await, Err(StoreError::Serialization(_))));
}
