use mood_analytics::MoodEntry;
use serde::{Deserialize, Serialize};

/// A mood entry together with the user it belongs to, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredMoodEntry {
	pub user_id: String,
	#[serde(flatten)]
	pub entry: MoodEntry,
}

impl StoredMoodEntry {
	pub fn new(user_id: impl Into<String>, entry: MoodEntry) -> Self {
		Self { user_id: user_id.into(), entry }
	}

	pub fn belongs_to(&self, user_id: &str) -> bool {
		self.user_id == user_id
	}
}
