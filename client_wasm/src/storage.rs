//! Win/loss tally in the browser's `localStorage`

use game_core::stats::{decode, encode};
use game_core::{Stats, StatsError, StatsStore};

pub const STATS_KEY: &str = "pong-stats";

pub struct LocalStorageStats {
    key: String,
}

impl LocalStorageStats {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl Default for LocalStorageStats {
    fn default() -> Self {
        Self::new(STATS_KEY)
    }
}

fn storage() -> Result<web_sys::Storage, StatsError> {
    let window = web_sys::window().ok_or_else(|| StatsError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StatsError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StatsError::Unavailable("localStorage disabled".into()))
}

impl StatsStore for LocalStorageStats {
    fn load(&self) -> Result<Option<Stats>, StatsError> {
        let raw = storage()?
            .get_item(&self.key)
            .map_err(|e| StatsError::Unavailable(format!("{:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }

    fn save(&mut self, stats: &Stats) -> Result<(), StatsError> {
        storage()?
            .set_item(&self.key, &encode(stats)?)
            .map_err(|e| StatsError::Unavailable(format!("{:?}", e)))
    }
}
