//! Win/loss persistence
//!
//! The store is an external collaborator. Whatever goes wrong in it stays
//! here: loading falls back to a zero record and saving failures are
//! reported to the caller, which logs and moves on.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::Stats;

/// Failure inside a stats backend
#[derive(Debug)]
pub enum StatsError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
    Unavailable(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Io(e) => write!(f, "stats io error: {}", e),
            StatsError::Corrupt(e) => write!(f, "stats record is corrupt: {}", e),
            StatsError::Unavailable(why) => write!(f, "stats storage unavailable: {}", why),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Io(e) => Some(e),
            StatsError::Corrupt(e) => Some(e),
            StatsError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> Self {
        StatsError::Io(e)
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> Self {
        StatsError::Corrupt(e)
    }
}

/// Key-value style storage for the fixed-shape `Stats` record
pub trait StatsStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Stats>, StatsError>;
    fn save(&mut self, stats: &Stats) -> Result<(), StatsError>;
}

/// Parse a stored record
pub fn decode(raw: &str) -> Result<Stats, StatsError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode(stats: &Stats) -> Result<String, StatsError> {
    Ok(serde_json::to_string(stats)?)
}

/// Load stats, treating every failure as an empty record
pub fn load_or_default(store: &dyn StatsStore) -> Stats {
    match store.load() {
        Ok(Some(stats)) => stats,
        Ok(None) => Stats::default(),
        Err(e) => {
            log::warn!("Could not load stats, starting from zero: {}", e);
            Stats::default()
        }
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStats {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed with a raw stored value, e.g. to simulate corruption
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.to_string()))),
        }
    }
}

impl StatsStore for MemoryStats {
    fn load(&self) -> Result<Option<Stats>, StatsError> {
        self.slot.borrow().as_deref().map(decode).transpose()
    }

    fn save(&mut self, stats: &Stats) -> Result<(), StatsError> {
        *self.slot.borrow_mut() = Some(encode(stats)?);
        Ok(())
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStats {
    path: PathBuf,
}

impl FileStats {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsStore for FileStats {
    fn load(&self) -> Result<Option<Stats>, StatsError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, stats: &Stats) -> Result<(), StatsError> {
        fs::write(&self.path, encode(stats)?)?;
        Ok(())
    }
}
