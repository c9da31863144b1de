//! Keyed collection of [`DailyLog`] records.
//!
//! The whole collection is one JSON array under [`LOGS_KEY`], kept sorted by
//! date, most recent first. There is at most one record per date: writing a
//! date that already exists merges into the stored record.
//!
//! Reads never fail. An unreadable value, or one that is not a JSON array,
//! is treated as an empty history. Inside the array, a record that cannot be
//! decoded (for example one without a valid date) is skipped and dropped on
//! the next write; the other records are kept.

use chrono::NaiveDate;

use super::{KeyValueStore, LOGS_KEY};
use crate::error::Result;
use crate::model::{ActivityCounts, DailyLog, DailyLogPatch};

pub struct LogStore<'a, S: KeyValueStore + ?Sized> {
    kv: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> LogStore<'a, S> {
    pub fn new(kv: &'a S) -> Self {
        Self { kv }
    }

    /// All records, most recent first.
    pub fn get_all(&self) -> Vec<DailyLog> {
        let raw = match self.kv.get(LOGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(%err, "log store unreadable, treating as empty");
                return Vec::new();
            }
        };
        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%err, "log store malformed, treating as empty");
                return Vec::new();
            }
        };

        let mut logs: Vec<DailyLog> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(log) => Some(log),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed daily log");
                    None
                }
            })
            .collect();
        sort_descending(&mut logs);
        logs
    }

    /// The `n` most recent records.
    pub fn recent(&self, n: usize) -> Vec<DailyLog> {
        let mut logs = self.get_all();
        logs.truncate(n);
        logs
    }

    pub fn get_by_date(&self, date: NaiveDate) -> Option<DailyLog> {
        self.get_all().into_iter().find(|log| log.date == date)
    }

    /// Insert a record, or merge `patch` into the record stored for its date.
    ///
    /// Returns the record as stored.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn upsert(&self, patch: impl Into<DailyLogPatch>) -> Result<DailyLog> {
        let patch = patch.into();
        let mut logs = self.get_all();

        let stored = match logs.iter_mut().find(|log| log.date == patch.date) {
            Some(existing) => {
                *existing = patch.merge_into(existing.clone());
                existing.clone()
            }
            None => {
                let created = patch.merge_into(DailyLog::new(patch.date));
                logs.push(created.clone());
                created
            }
        };

        sort_descending(&mut logs);
        self.write_all(&logs)?;
        tracing::debug!(date = %stored.date, records = logs.len(), "daily log upserted");
        Ok(stored)
    }

    /// Add `delta` to the counters of `date`, creating the record if needed.
    ///
    /// This is a read followed by a write with no isolation; a concurrent
    /// writer for the same date loses to whichever write lands last.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn add_activity(&self, date: NaiveDate, delta: ActivityCounts) -> Result<DailyLog> {
        let current = self
            .get_by_date(date)
            .map(|log| log.counts())
            .unwrap_or_default();
        let next = current.saturating_add(delta);
        self.upsert(
            DailyLogPatch::for_date(date)
                .contacts(next.contacts)
                .conversations(next.conversations)
                .meetings(next.meetings)
                .sales(next.sales),
        )
    }

    fn write_all(&self, logs: &[DailyLog]) -> Result<()> {
        let raw = serde_json::to_string(logs)?;
        self.kv.set(LOGS_KEY, &raw)?;
        Ok(())
    }
}

fn sort_descending(logs: &mut [DailyLog]) {
    logs.sort_by(|a, b| b.date.cmp(&a.date));
}
