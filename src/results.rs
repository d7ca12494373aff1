use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{APP_DIR_NAME, RECENT_RESULTS_CAPACITY};
use crate::error::StoreError;

const STORAGE_FILE_NAME: &str = "storage.json";

/// On-disk document. Keys other than the results list are carried through
/// untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageDocument {
    /// Recent scores, oldest first, under the fixed key `gameResults`.
    #[serde(rename = "gameResults", default, skip_serializing_if = "Option::is_none")]
    game_results: Option<Vec<u32>>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

/// Scores of the most recent finished games, oldest first.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RecentResults {
    scores: VecDeque<u32>,
}

impl RecentResults {
    /// Keeps only the newest entries of `scores`.
    #[must_use]
    pub fn from_scores(scores: impl IntoIterator<Item = u32>) -> Self {
        let mut recent = Self::default();
        for score in scores {
            recent.push(score);
        }
        recent
    }

    /// Appends `score`, dropping the oldest entry when full.
    pub fn push(&mut self, score: u32) {
        self.scores.push_back(score);
        while self.scores.len() > RECENT_RESULTS_CAPACITY {
            let _ = self.scores.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.scores.iter().copied()
    }

    /// One entry per display row, `None` for rows with no game yet.
    #[must_use]
    pub fn slots(&self) -> [Option<u32>; RECENT_RESULTS_CAPACITY] {
        let mut slots = [None; RECENT_RESULTS_CAPACITY];
        for (slot, score) in slots.iter_mut().zip(self.iter()) {
            *slot = Some(score);
        }
        slots
    }
}

/// Persistence for the recent-results list.
pub trait ResultStore {
    /// Reads the stored list.
    fn load_recent(&self) -> Result<RecentResults, StoreError>;

    /// Appends `score`, keeps the newest entries, and returns the new list.
    fn save_recent(&mut self, score: u32) -> Result<RecentResults, StoreError>;
}

/// Keeps results for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    recent: RecentResults,
}

impl ResultStore for MemoryStore {
    fn load_recent(&self) -> Result<RecentResults, StoreError> {
        Ok(self.recent.clone())
    }

    fn save_recent(&mut self, score: u32) -> Result<RecentResults, StoreError> {
        self.recent.push(score);
        Ok(self.recent.clone())
    }
}

/// Key-value JSON document on disk; the list lives under one fixed key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform-correct default location.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(default_storage_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<StorageDocument, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StorageDocument::default()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, document: &StorageDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ResultStore for JsonFileStore {
    fn load_recent(&self) -> Result<RecentResults, StoreError> {
        let document = self.read_document()?;
        Ok(RecentResults::from_scores(
            document.game_results.unwrap_or_default(),
        ))
    }

    fn save_recent(&mut self, score: u32) -> Result<RecentResults, StoreError> {
        let mut document = self.read_document()?;
        let mut recent =
            RecentResults::from_scores(document.game_results.take().unwrap_or_default());
        recent.push(score);

        document.game_results = Some(recent.iter().collect());
        self.write_document(&document)?;
        debug!("saved score {score} to {}", self.path.display());
        Ok(recent)
    }
}

/// Returns the platform-correct storage document path.
#[must_use]
pub fn default_storage_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(STORAGE_FILE_NAME);
    base
}
