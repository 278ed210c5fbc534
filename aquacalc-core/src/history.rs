//! Optional persistence of light readings.
//!
//! Nothing in the calculators depends on a store. [`NoopStore`] is the default
//! port implementation: it accepts every write and never returns anything.

use crate::{error::AquacalcError, light::evaluate_light_level};
use aquacalc_schemas::light::{LightHistoryItem, LightReading, LightRecord};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// Records older than this are removed by [`LightHistory::cleanup_old_data`].
pub const RETENTION_DAYS: i64 = 30;

pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub trait LightRecordStore {
    fn all_records(&self) -> Result<Vec<LightRecord>, AquacalcError>;

    /// Newest records first, at most `limit` of them.
    fn recent_records(&self, limit: usize) -> Result<Vec<LightRecord>, AquacalcError>;

    /// Returns the id assigned to the stored record.
    fn insert(&mut self, record: LightRecord) -> Result<u64, AquacalcError>;

    /// Removes records with `timestamp_ms < cutoff_ms`.
    fn delete_older_than(&mut self, cutoff_ms: i64) -> Result<(), AquacalcError>;

    fn count(&self) -> Result<usize, AquacalcError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl LightRecordStore for NoopStore {
    fn all_records(&self) -> Result<Vec<LightRecord>, AquacalcError> {
        Ok(Vec::new())
    }

    fn recent_records(&self, _limit: usize) -> Result<Vec<LightRecord>, AquacalcError> {
        Ok(Vec::new())
    }

    fn insert(&mut self, _record: LightRecord) -> Result<u64, AquacalcError> {
        Ok(0)
    }

    fn delete_older_than(&mut self, _cutoff_ms: i64) -> Result<(), AquacalcError> {
        Ok(())
    }

    fn count(&self) -> Result<usize, AquacalcError> {
        Ok(0)
    }
}

/// Builds an unsaved record (id 0) with its level classified from the intensity.
pub fn record_from_reading(
    reading: LightReading,
    timestamp_ms: i64,
    notes: impl Into<String>,
) -> LightRecord {
    LightRecord {
        id: 0,
        intensity_lux: reading.intensity_lux,
        color_temperature_k: reading.color_temperature_k,
        timestamp_ms,
        level: evaluate_light_level(reading.intensity_lux),
        notes: notes.into(),
    }
}

/// Repository over a [`LightRecordStore`] that shapes records for display.
/// Times are formatted in `tz`, the host's local zone unless set otherwise.
pub struct LightHistory<S: LightRecordStore, Tz: TimeZone = Local> {
    store: S,
    tz: Tz,
}

impl<S: LightRecordStore> LightHistory<S, Local> {
    pub fn new(store: S) -> Self {
        Self { store, tz: Local }
    }
}

impl<S, Tz> LightHistory<S, Tz>
where
    S: LightRecordStore,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    pub fn with_timezone(store: S, tz: Tz) -> Self {
        Self { store, tz }
    }

    pub fn all(&self) -> Result<Vec<LightHistoryItem>, AquacalcError> {
        Ok(self
            .store
            .all_records()?
            .iter()
            .map(|r| to_history_item(r, &self.tz))
            .collect())
    }

    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<LightHistoryItem>, AquacalcError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        Ok(self
            .store
            .recent_records(limit)?
            .iter()
            .map(|r| to_history_item(r, &self.tz))
            .collect())
    }

    pub fn insert(&mut self, record: LightRecord) -> Result<u64, AquacalcError> {
        self.store.insert(record)
    }

    /// Deletes everything older than [`RETENTION_DAYS`] before `now`.
    pub fn cleanup_old_data(&mut self, now: DateTime<Utc>) -> Result<(), AquacalcError> {
        let cutoff = now - Duration::days(RETENTION_DAYS);
        self.store.delete_older_than(cutoff.timestamp_millis())
    }

    pub fn count(&self) -> Result<usize, AquacalcError> {
        self.store.count()
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Formats a record's timestamp in `tz` as e.g. "3:07 PM" and "Oct 15, 2026".
/// Out-of-range timestamps leave both strings empty.
pub fn to_history_item<Tz>(record: &LightRecord, tz: &Tz) -> LightHistoryItem
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (formatted_time, formatted_date) = match DateTime::from_timestamp_millis(record.timestamp_ms) {
        Some(utc) => {
            let local = utc.with_timezone(tz);
            (
                local.format("%-I:%M %p").to_string(),
                local.format("%b %d, %Y").to_string(),
            )
        }
        None => (String::new(), String::new()),
    };

    LightHistoryItem {
        id: record.id,
        intensity_lux: record.intensity_lux,
        color_temperature_k: record.color_temperature_k,
        level: record.level,
        timestamp_ms: record.timestamp_ms,
        notes: record.notes.clone(),
        formatted_time,
        formatted_date,
    }
}
