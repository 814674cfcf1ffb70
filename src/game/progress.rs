//! Durable game progress
//!
//! Progress is a small set of string keys held by a [`KeyValueStore`]:
//!
//! | key                     | value                                  |
//! |-------------------------|----------------------------------------|
//! | `kmap_game_level_2var`  | index of the next unsolved 2-var level |
//! | `kmap_game_level_3var`  | index of the next unsolved 3-var level |
//! | `tutorialLearned`       | `yes` once the tutorial was seen       |
//!
//! Counters are decimal strings. A missing or unreadable counter reads as 0.

use crate::kmap::VarCount;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Prefix of the per-mode level counter keys
pub const LEVEL_KEY_PREFIX: &str = "kmap_game_level";

/// Key of the tutorial-seen flag
pub const TUTORIAL_KEY: &str = "tutorialLearned";

const TUTORIAL_SEEN: &str = "yes";

/// String key-value storage behind [`ProgressStore`]
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store with one `key=value` pair per line
///
/// The file is read once when the store is opened and rewritten on every
/// [`KeyValueStore::set`]. Lines without `=` are ignored.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store, starting empty if the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(content) => parse_lines(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        debug!("progress: opened {} ({} keys)", path.display(), values.len());
        Ok(FileStore { path, values })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let content: String = self
            .values
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();
        fs::write(&self.path, content)
    }
}

fn parse_lines(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

/// Game progress on top of a key-value store
///
/// # Examples
///
/// ```
/// use kmap_logic::game::{MemoryStore, ProgressStore};
/// use kmap_logic::VarCount;
///
/// # fn main() -> std::io::Result<()> {
/// let mut progress = ProgressStore::new(MemoryStore::new());
/// assert_eq!(progress.level(VarCount::Two)?, 0);
///
/// progress.record(VarCount::Two, 3)?;
/// progress.record(VarCount::Two, 1)?; // never moves backwards
/// assert_eq!(progress.level(VarCount::Two)?, 3);
/// assert_eq!(progress.level(VarCount::Three)?, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProgressStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Wrap a key-value store
    pub fn new(store: S) -> Self {
        ProgressStore { store }
    }

    /// Storage key of the level counter for a mode
    pub fn level_key(vars: VarCount) -> String {
        format!("{}_{}", LEVEL_KEY_PREFIX, vars.mode_key())
    }

    /// Stored level counter for a mode (0 when absent or unreadable)
    pub fn level(&self, vars: VarCount) -> io::Result<usize> {
        let value = self.store.get(&Self::level_key(vars))?;
        Ok(value.and_then(|v| v.trim().parse().ok()).unwrap_or(0))
    }

    /// Raise the level counter to `reached` if that is higher than stored
    ///
    /// Returns whether anything was written.
    pub fn record(&mut self, vars: VarCount, reached: usize) -> io::Result<bool> {
        if reached <= self.level(vars)? {
            return Ok(false);
        }
        info!("progress: {}-variable level counter -> {}", vars, reached);
        self.store.set(&Self::level_key(vars), &reached.to_string())?;
        Ok(true)
    }

    /// True once the tutorial was marked as seen
    pub fn tutorial_seen(&self) -> io::Result<bool> {
        Ok(self.store.get(TUTORIAL_KEY)?.as_deref() == Some(TUTORIAL_SEEN))
    }

    /// Remember that the tutorial was seen
    pub fn mark_tutorial_seen(&mut self) -> io::Result<()> {
        info!("progress: tutorial marked as seen");
        self.store.set(TUTORIAL_KEY, TUTORIAL_SEEN)
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the underlying store back
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_keys() {
        assert_eq!(
            ProgressStore::<MemoryStore>::level_key(VarCount::Two),
            "kmap_game_level_2var"
        );
        assert_eq!(
            ProgressStore::<MemoryStore>::level_key(VarCount::Three),
            "kmap_game_level_3var"
        );
    }

    #[test]
    fn test_record_only_moves_forward() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        assert!(progress.record(VarCount::Three, 2).unwrap());
        assert!(!progress.record(VarCount::Three, 2).unwrap());
        assert!(!progress.record(VarCount::Three, 1).unwrap());
        assert_eq!(progress.level(VarCount::Three).unwrap(), 2);
        assert_eq!(
            progress.store().get("kmap_game_level_3var").unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_unreadable_counter_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set("kmap_game_level_2var", "not a number").unwrap();
        let mut progress = ProgressStore::new(store);
        assert_eq!(progress.level(VarCount::Two).unwrap(), 0);
        assert!(progress.record(VarCount::Two, 1).unwrap());
        assert_eq!(progress.level(VarCount::Two).unwrap(), 1);
    }

    #[test]
    fn test_tutorial_flag() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        assert!(!progress.tutorial_seen().unwrap());
        progress.mark_tutorial_seen().unwrap();
        assert!(progress.tutorial_seen().unwrap());
        assert_eq!(
            progress.into_inner().get("tutorialLearned").unwrap().as_deref(),
            Some("yes")
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        store.set("kmap_game_level_2var", "4").unwrap();
        store.set("tutorialLearned", "yes").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("kmap_game_level_2var").unwrap().as_deref(),
            Some("4")
        );
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "kmap_game_level_2var=4\ntutorialLearned=yes\n");
    }

    #[test]
    fn test_file_store_ignores_junk_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress");
        fs::write(&path, "# comment\nkmap_game_level_3var = 7\n\n").unwrap();

        let progress = ProgressStore::new(FileStore::open(&path).unwrap());
        assert_eq!(progress.level(VarCount::Three).unwrap(), 7);
    }
}
