use crate::error::{Result, StoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use mood_analytics::window::between;
use mood_analytics::MoodEntry;

/// Where mood entries live. The analytics engine never talks to a store
/// itself: callers load a user's entries through this trait and pass the
/// resulting list in.
///
/// Lists come back in insertion order.
#[async_trait]
pub trait MoodEntryStore: Send + Sync {
	/// Validate and append an entry for `user_id`, returning it as stored.
	async fn create(&self, user_id: &str, entry: MoodEntry) -> Result<MoodEntry>;

	async fn list(&self, user_id: &str) -> Result<Vec<MoodEntry>>;

	/// Entries for `user_id` dated within `start..=end`.
	async fn query(&self, user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<MoodEntry>> {
		if start > end {
			return Err(StoreError::InvalidRange { start, end });
		}
		let entries = self.list(user_id).await?;
		Ok(between(&entries, start, end))
	}
}
