//! The K-map game: a level catalog, progression and saved progress
//!
//! Each mode (two or three variables) has its own list of [`Level`]s. A
//! [`GameSession`] walks through them, checking the player's cells against
//! each level's target, and keeps the furthest level reached in a
//! [`ProgressStore`]. The store sits on top of any [`KeyValueStore`]:
//! [`MemoryStore`] for tests and embedding, [`FileStore`] for a plain text
//! file.

mod catalog;
mod progress;
mod session;

pub use catalog::{levels, Level};
pub use progress::{
    FileStore, KeyValueStore, MemoryStore, ProgressStore, LEVEL_KEY_PREFIX, TUTORIAL_KEY,
};
pub use session::{Feedback, GameSession};
