//! The analytics pipeline for "today".
//!
//! [`Ritmo`] ties a key-value store to a clock: writes land in the log
//! store, the current week is resolved from the clock, and the rhythm,
//! energy and target computations run over that data.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::energy::{self, EnergyBand, EnergyScore};
use crate::error::Result;
use crate::model::{ActivityCounts, DailyLog, DailyLogPatch, EnergyLog, PhysicalState, UserConfig};
use crate::plan::{self, PlanBlock};
use crate::rhythm::{self, MetricProgress, RhythmReport};
use crate::storage::{ConfigStore, KeyValueStore, LogStore};
use crate::targets::{self, AdjustedTargets};
use crate::view::ViewMachine;
use crate::week::{self, ChartPoint, WeekBounds};

/// End-of-day emotional check-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub drainers: BTreeSet<String>,
    pub energizers: BTreeSet<String>,
    pub battery_level: u8,
}

/// Everything the main screen shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub date: NaiveDate,
    pub week: WeekBounds,
    pub rhythm: RhythmReport,
    pub progress: Vec<MetricProgress>,
    pub suggested_action: String,
    pub chart: Vec<ChartPoint>,
    pub checked_in: bool,
    pub energy: EnergyScore,
    pub energy_band: EnergyBand,
    pub targets: AdjustedTargets,
    pub targets_label: String,
    pub plan_label: String,
    pub plan: Vec<PlanBlock>,
}

pub struct Ritmo<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> Ritmo<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn configs(&self) -> ConfigStore<'_, S> {
        ConfigStore::new(&self.store)
    }

    pub fn logs(&self) -> LogStore<'_, S> {
        LogStore::new(&self.store)
    }

    pub fn config(&self) -> UserConfig {
        self.configs().load()
    }

    pub fn today_log(&self) -> Option<DailyLog> {
        self.logs().get_by_date(self.today())
    }

    /// Navigation state machine seeded from persisted data.
    pub fn view(&self) -> ViewMachine {
        ViewMachine::start(&self.config(), self.today_log().as_ref())
    }

    /// Add to today's counters.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn record_activity(&self, delta: ActivityCounts) -> Result<DailyLog> {
        self.logs().add_activity(self.today(), delta)
    }

    /// Store the morning check-in for today, keeping today's counters.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn check_in(&self, physical: PhysicalState) -> Result<DailyLog> {
        let energy = EnergyLog::morning_checkin(physical);
        self.logs()
            .upsert(DailyLogPatch::for_date(self.today()).energy(energy))
    }

    /// Record the evening check-out into today's energy record.
    ///
    /// Returns `None` without writing when today has no check-in yet.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn check_out(&self, checkout: Checkout) -> Result<Option<DailyLog>> {
        let Some(mut energy) = self.today_log().and_then(|log| log.energy) else {
            tracing::info!(date = %self.today(), "check-out skipped, no check-in today");
            return Ok(None);
        };
        energy.emotional.drainers = checkout.drainers;
        energy.emotional.energizers = checkout.energizers;
        energy.emotional.battery_level = checkout.battery_level;
        let log = self
            .logs()
            .upsert(DailyLogPatch::for_date(self.today()).energy(energy))?;
        Ok(Some(log))
    }

    pub fn weekly_logs(&self) -> Vec<DailyLog> {
        week::filter_to_current_week(&self.logs().get_all(), &self.clock)
    }

    pub fn rhythm(&self) -> RhythmReport {
        rhythm::classify(&self.weekly_logs(), &self.config())
    }

    pub fn energy(&self) -> EnergyScore {
        energy::score(self.today_log().as_ref(), &self.config())
    }

    /// Suggested blocks for today from the user's peak productivity.
    pub fn plan(&self) -> Vec<PlanBlock> {
        plan::day_plan(self.config().peak_productivity)
    }

    pub fn targets(&self) -> AdjustedTargets {
        targets::adjust(self.energy().total, &self.config().daily_targets)
    }

    /// Run the whole pipeline. `None` until onboarding is complete.
    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        let config = self.config();
        if !config.is_onboarded {
            return None;
        }

        let today = self.today();
        let logs = self.logs().get_all();
        let today_log = logs.iter().find(|log| log.date == today);
        let bounds = week::week_bounds(today);
        let weekly = week::filter_to_week(&logs, bounds);

        let rhythm = rhythm::classify(&weekly, &config);
        let energy = energy::score(today_log, &config);
        let targets = targets::adjust(energy.total, &config.daily_targets);

        Some(DashboardSnapshot {
            date: today,
            week: bounds,
            progress: rhythm::progress(&rhythm.totals, &config),
            suggested_action: rhythm::suggested_action(rhythm.status, &config),
            chart: week::chart_series(&weekly),
            checked_in: today_log.is_some_and(DailyLog::has_checkin),
            energy_band: EnergyBand::of(energy.total),
            targets_label: targets.label(),
            plan_label: plan::plan_label(config.peak_productivity).to_string(),
            plan: plan::day_plan(config.peak_productivity),
            rhythm,
            energy,
            targets,
        })
    }
}
