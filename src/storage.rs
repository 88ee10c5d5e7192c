//! Session persistence
//!
//! A small key-value store stands in for the browser-style local storage
//! the editor shell saves into: string keys, string values, surviving
//! across sessions, no expiry. Two backends: an in-memory map for tests
//! and a JSON file under the user config dir for real use.
//!
//! Also home of the debounced-save scheduler: saving is armed on every
//! edit and fires at most once per idle interval.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Store key for the raw document text, saved verbatim.
pub const CONTENT_KEY: &str = "markdownContent";
/// Store key for the dark-mode flag ("true"/"false").
pub const DARK_MODE_KEY: &str = "darkMode";

/// Key-value string storage surviving across sessions.
pub trait Store: std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// =============================================================================
// MemoryStore - for tests and embedders with their own persistence
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FileStore - JSON map on disk, write-through
// =============================================================================

/// Store backed by a JSON object on disk. Reads happen once at open;
/// every write persists the whole map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing entries. A missing
    /// or unreadable file starts empty; a corrupt one is logged and
    /// replaced on the next write.
    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Discarding corrupt session store at {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.persist()
    }
}

// =============================================================================
// SaveScheduler
// =============================================================================

/// Deadline-based debounce for persistence. Every edit re-arms the
/// deadline; the shell's tick polls it, and it fires at most once per
/// idle interval.
#[derive(Debug, Clone)]
pub struct SaveScheduler {
    interval: Duration,
    deadline: Option<Instant>,
}

impl SaveScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline `interval` from now.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the armed deadline has passed.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
