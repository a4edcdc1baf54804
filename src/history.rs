//! Append-only record of analysed reviews, read back newest first.
//!
//! Durable storage is left to the host application; [`MemoryHistory`] keeps
//! records in process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

use crate::core::{AspectSentimentMap, SentimentLabel};
use crate::error::{Result, SentimentError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub user: String,
    /// The review as submitted, before translation.
    pub review_text: String,
    pub sentiment: SentimentLabel,
    pub aspects: AspectSentimentMap,
    pub created_at: DateTime<Utc>,
}

pub trait HistoryStore: Send + Sync {
    fn append(&self, record: HistoryRecord) -> Result<()>;

    /// Most recent records of `user`, newest first.
    fn recent(&self, user: &str, limit: usize) -> Result<Vec<HistoryRecord>>;
}

#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<HistoryRecord>>> {
        self.records
            .lock()
            .map_err(|e| SentimentError::History(e.to_string()))
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, record: HistoryRecord) -> Result<()> {
        self.lock()?.push(record);
        Ok(())
    }

    fn recent(&self, user: &str, limit: usize) -> Result<Vec<HistoryRecord>> {
        let records = self.lock()?;

        let mut matching: Vec<HistoryRecord> = records
            .iter()
            .filter(|r| r.user == user)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps; reverse it so
        // the later append comes first.
        matching.reverse();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        Ok(matching)
    }
}
