//! Daily record access and mutation.
//!
//! Every mutator reads the current record for today, changes one field (or the
//! break list) and writes the whole record back.

use crate::core::calculator::{departure, lunch, remaining};
use crate::core::clock::Clock;
use crate::core::legacy;
use crate::core::settings::TrackerSettings;
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::Millis;
use crate::models::break_interval::BreakInterval;
use crate::models::break_state::{BreakPolicy, BreakState};
use crate::models::daily_record::DailyRecord;
use crate::models::remaining::Remaining;
use crate::utils::date::date_key;
use chrono::NaiveDate;

pub struct DailyTracker<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    settings: TrackerSettings,
}

impl<S: KeyValueStore, C: Clock> DailyTracker<S, C> {
    pub fn new(store: S, clock: C, settings: TrackerSettings) -> Self {
        Self {
            store,
            clock,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn key_for(&self, date: NaiveDate) -> AppResult<String> {
        date_key(date, &self.settings.key_format)
    }

    // ---------------------------
    // Record access
    // ---------------------------

    /// Record for `date`, created with `arrival = now` (and persisted) when absent.
    /// A legacy value is upgraded and persisted before being returned.
    pub fn get_record(&mut self, date: NaiveDate) -> AppResult<DailyRecord> {
        let key = self.key_for(date)?;

        match legacy::decode_record(&self.store, &key)? {
            Some((record, false)) => Ok(record),
            Some((record, true)) => {
                self.store.update(&key, &serde_json::to_value(&record)?)?;
                Ok(record)
            }
            None => {
                let record = DailyRecord::new(self.clock.now_ms());
                self.store.update(&key, &serde_json::to_value(&record)?)?;
                Ok(record)
            }
        }
    }

    /// Read-only lookup: never creates nor rewrites anything.
    pub fn peek_record(&self, date: NaiveDate) -> AppResult<Option<DailyRecord>> {
        let key = self.key_for(date)?;
        Ok(legacy::decode_record(&self.store, &key)?.map(|(record, _)| record))
    }

    /// Replace the stored record for `date` wholesale.
    pub fn save_record(&mut self, date: NaiveDate, record: &DailyRecord) -> AppResult<()> {
        let key = self.key_for(date)?;
        self.store.update(&key, &serde_json::to_value(record)?)
    }

    pub fn today_record(&mut self) -> AppResult<DailyRecord> {
        let today = self.today();
        self.get_record(today)
    }

    fn mutate_today<F>(&mut self, change: F) -> AppResult<DailyRecord>
    where
        F: FnOnce(&mut DailyRecord, Millis),
    {
        let today = self.today();
        let now = self.clock.now_ms();

        let mut record = self.get_record(today)?;
        change(&mut record, now);
        self.save_record(today, &record)?;

        Ok(record)
    }

    // ---------------------------
    // Field mutators
    // ---------------------------

    /// Overwrite the arrival; `None` means now.
    pub fn set_arrival(&mut self, at: Option<Millis>) -> AppResult<DailyRecord> {
        self.mutate_today(|r, now| r.arrival = at.unwrap_or(now))
    }

    pub fn set_departure(&mut self, at: Option<Millis>) -> AppResult<DailyRecord> {
        self.mutate_today(|r, now| r.departure = Some(at.unwrap_or(now)))
    }

    /// No ordering check against the lunch end.
    pub fn set_lunch_start(&mut self, at: Option<Millis>) -> AppResult<DailyRecord> {
        self.mutate_today(|r, now| r.lunch_start = Some(at.unwrap_or(now)))
    }

    pub fn set_lunch_end(&mut self, at: Option<Millis>) -> AppResult<DailyRecord> {
        self.mutate_today(|r, now| r.lunch_end = Some(at.unwrap_or(now)))
    }

    /// Open a new break.
    ///
    /// Permissive: always appends, even when a break is already open.
    /// Strict: fails with `BreakAlreadyOpen` and leaves storage untouched.
    pub fn start_break(&mut self) -> AppResult<DailyRecord> {
        if self.settings.break_policy == BreakPolicy::Strict
            && self.today_record()?.break_state() == BreakState::OnBreak
        {
            return Err(AppError::BreakAlreadyOpen);
        }

        self.mutate_today(|r, now| r.breaks.push(BreakInterval::open(now)))
    }

    /// Close the most recent break.
    ///
    /// Permissive: the last break is popped, closed if open, and pushed back;
    /// the record is rewritten even when nothing changed.
    /// Strict: when idle nothing is written.
    pub fn end_break(&mut self) -> AppResult<DailyRecord> {
        if self.settings.break_policy == BreakPolicy::Strict {
            let record = self.today_record()?;
            if record.break_state() == BreakState::Idle {
                return Ok(record);
            }
        }

        self.mutate_today(|r, now| {
            if let Some(mut last) = r.breaks.pop() {
                if last.end.is_none() {
                    last.end = Some(now);
                }
                r.breaks.push(last);
            }
        })
    }

    // ---------------------------
    // Derived values
    // ---------------------------

    pub fn lunch_duration(&self, record: &DailyRecord) -> Millis {
        lunch::lunch_duration(record, self.settings.default_lunch_ms)
    }

    pub fn expected_departure(&self, record: &DailyRecord) -> Millis {
        departure::expected_departure(record, self.settings.workday_ms)
    }

    pub fn remaining(&self, record: &DailyRecord, now: Millis) -> Remaining {
        remaining::compute_remaining(record, now, &self.settings)
    }
}
