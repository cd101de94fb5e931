pub mod error;
pub mod json_file;
pub mod memory;
pub mod model;
pub mod repository;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use json_file::JsonFileMoodStore;
pub use memory::InMemoryMoodStore;
pub use model::StoredMoodEntry;
pub use repository::MoodEntryStore;
