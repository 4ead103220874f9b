pub mod journal;
pub mod mood;

pub use journal::{ExportSnapshot, JournalEntry, GRATITUDE_TITLE, UNTITLED};
pub use mood::{Mood, MoodEntry};
